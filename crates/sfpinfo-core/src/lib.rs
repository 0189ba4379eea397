//! sfpinfo core library for SFF-8472 module EEPROM decoding.
//!
//! This crate turns the raw A0h serial ID map of an SFP/SFP+ module into
//! typed, unit-normalized fields. Transports (`source`) fetch the bytes once
//! per read cycle; the decoders (`eeprom`, layout/reader/parser) are pure and
//! total; the analysis layer sequences the two and builds a deterministic
//! report.
//!
//! Invariants:
//! - A `Valid` length is `raw * unit` for a non-sentinel raw byte.
//! - An `Extended` length carries the lower bound implied by 0xFF.
//! - A `NotSpecified` length is always 0 m and means "no data".
//! - The medium is classified before byte 18 is scaled.
//!
//! # Examples
//! ```
//! use sfpinfo_core::{LinkLength, MapSize, MemoryBus, ModuleIdentifier, read_module};
//!
//! let mut a0 = vec![0u8; 64];
//! a0[0] = 0x03;
//! a0[17] = 0x19;
//! let mut bus = MemoryBus::new(a0);
//!
//! let record = read_module(&mut bus, MapSize::Base)?;
//! assert_eq!(record.identifier, ModuleIdentifier::Sfp);
//! assert_eq!(record.om1_length, LinkLength::valid(250));
//! # Ok::<(), sfpinfo_core::SourceError>(())
//! ```

use serde::{Deserialize, Serialize};

mod analysis;
pub mod eeprom;
pub mod source;

pub use analysis::{
    AnalysisError, MapSize, analyze_dump_file, analyze_source, fetch_a0_map, read_module,
};
pub use eeprom::a0::{
    A0Reader, DecodedModuleRecord, ModuleIdentifier, RawModuleMap, decode_identifier,
    decode_module, decode_om1_length, decode_om2_length, decode_om4_or_copper_length,
    decode_smf_length, is_copper_medium,
};
pub use eeprom::common::{LengthStatus, LinkLength, decode_length_byte};
pub use source::dump::{DumpFormat, format_hex_dump};
pub use source::{
    A0_DEVICE_ADDRESS, A2_DEVICE_ADDRESS, BusConfig, DumpFileSource, HalBus, MemoryBus,
    ModuleBus, SourceError,
};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Default timestamp; the CLI replaces it with the time of the read.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Decoded module report with deterministic field ordering.
///
/// # Examples
/// ```
/// use sfpinfo_core::make_stub_report;
///
/// let report = make_stub_report("module.bin", "binary", 64);
/// assert_eq!(report.report_version, sfpinfo_core::REPORT_VERSION);
/// assert!(report.module.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp representing the report generation time.
    pub generated_at: String,
    /// Input metadata.
    pub input: InputInfo,
    /// Decoded module fields, absent when nothing was decoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// Input metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the analyzer.
    pub path: String,
    /// Input kind (`binary`, `hex`, or a caller-supplied label).
    pub format: String,
    /// Number of A0h bytes fetched and decoded.
    pub map_bytes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleSummary {
    pub identifier: IdentifierSummary,
    /// `copper` or `fiber`, from the byte 8 cable technology bits.
    pub medium: String,
    /// Link lengths in ascending byte offset.
    pub lengths: Vec<LengthSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifierSummary {
    /// Raw byte 0.
    pub code: u8,
    pub name: String,
    /// True only for SFP/SFP+.
    pub supported: bool,
}

/// One link-length field.
///
/// # Examples
/// ```
/// use sfpinfo_core::{LengthStatus, LengthSummary};
///
/// let entry = LengthSummary {
///     field: "om1".to_string(),
///     offset: 17,
///     status: LengthStatus::Extended,
///     meters: 2540,
/// };
/// assert_eq!(entry.status.as_str(), "extended");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LengthSummary {
    /// `smf`, `om2`, `om1`, and `om4` or `copper` for byte 18.
    pub field: String,
    /// A0h byte offset the field was decoded from.
    pub offset: u8,
    pub status: LengthStatus,
    /// Metres; a lower bound when `status` is `extended`, 0 when unspecified.
    pub meters: u16,
}

/// Build a report with base fields filled and no module summary.
pub fn make_stub_report(input_path: &str, input_format: &str, map_bytes: u64) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "sfpinfo".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input: InputInfo {
            path: input_path.to_string(),
            format: input_format.to_string(),
            map_bytes,
        },
        module: None,
    }
}
