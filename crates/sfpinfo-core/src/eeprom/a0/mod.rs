//! SFF-8472 A0h (serial ID) map decoding.
//!
//! Covers the module identifier (byte 0), the copper cable technology bits
//! (byte 8) and the single-byte link lengths (bytes 15-18). Length fields
//! share one tri-state convention: 0x00 is "not specified", 0xFF is "longer
//! than representable" and carries the lower bound, anything else is
//! `raw * unit`.
//!
//! Byte 18 is the one cross-field dependency in the map: its unit is 1 m for
//! copper cables and 10 m for OM4 fiber, so `is_copper_medium` has to run
//! first and its result is passed explicitly to
//! `decode_om4_or_copper_length`.

pub mod error;
pub mod identifier;
pub mod layout;
pub mod parser;
pub mod reader;

pub use identifier::ModuleIdentifier;
pub use parser::{
    DecodedModuleRecord, decode_identifier, decode_module, decode_om1_length, decode_om2_length,
    decode_om4_or_copper_length, decode_smf_length, is_copper_medium,
};
pub use reader::{A0Reader, RawModuleMap};
