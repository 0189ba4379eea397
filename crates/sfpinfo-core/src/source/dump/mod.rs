//! EEPROM dump files.
//!
//! Binary dumps are raw bytes as written by `ethtool -m <iface> raw on`: the
//! A0h page, optionally followed by the A2h page. Hex dumps are text with
//! two-digit hex bytes per line and an optional `OFFSET:` prefix, the same
//! format `format_hex_dump` writes.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::{DumpFileSource, DumpImage};
pub use reader::{DumpFormat, format_hex_dump, parse_hex_text};
