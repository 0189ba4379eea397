use std::path::Path;

use thiserror::Error;

use crate::eeprom::a0::{DecodedModuleRecord, RawModuleMap, decode_module, layout};
use crate::source::{A0_DEVICE_ADDRESS, DumpFileSource, ModuleBus, SourceError};
use crate::{Report, make_stub_report};

mod summary;

use summary::build_module_summary;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

/// How much of the A0h page to fetch in one read cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapSize {
    /// Base ID fields, bytes 0..=63.
    #[default]
    Base,
    /// Base and extended ID fields, bytes 0..=127.
    Extended,
    /// Whole page, bytes 0..=255.
    Full,
}

impl MapSize {
    pub fn bytes(self) -> usize {
        match self {
            MapSize::Base => layout::BASE_SIZE,
            MapSize::Extended => layout::EXTENDED_SIZE,
            MapSize::Full => layout::FULL_SIZE,
        }
    }

    /// # Examples
    /// ```
    /// use sfpinfo_core::MapSize;
    ///
    /// assert_eq!(MapSize::from_bytes(128), Some(MapSize::Extended));
    /// assert_eq!(MapSize::from_bytes(100), None);
    /// ```
    pub fn from_bytes(bytes: usize) -> Option<Self> {
        match bytes {
            layout::BASE_SIZE => Some(MapSize::Base),
            layout::EXTENDED_SIZE => Some(MapSize::Extended),
            layout::FULL_SIZE => Some(MapSize::Full),
            _ => None,
        }
    }
}

/// Fetch the A0h map with a single block read from offset 0.
pub fn fetch_a0_map<B: ModuleBus>(bus: &mut B, size: MapSize) -> Result<RawModuleMap, SourceError> {
    let mut buf = vec![0u8; size.bytes()];
    bus.read_block(A0_DEVICE_ADDRESS, 0x00, &mut buf)?;
    log::debug!("fetched {} A0h bytes", buf.len());
    Ok(RawModuleMap::new(buf))
}

/// One read cycle: fetch once, then decode. A failed fetch stops the cycle
/// before any decoder runs.
pub fn read_module<B: ModuleBus>(
    bus: &mut B,
    size: MapSize,
) -> Result<DecodedModuleRecord, SourceError> {
    let map = fetch_a0_map(bus, size)?;
    Ok(decode_module(&map))
}

pub fn analyze_dump_file(path: &Path, size: MapSize) -> Result<Report, AnalysisError> {
    let source = DumpFileSource::open(path)?;
    let format = source.format().as_str();
    analyze_source(path, format, source, size)
}

pub fn analyze_source<B: ModuleBus>(
    path: &Path,
    format: &str,
    mut bus: B,
    size: MapSize,
) -> Result<Report, AnalysisError> {
    let map = fetch_a0_map(&mut bus, size)?;
    let record = decode_module(&map);
    if !record.identifier.is_known() {
        log::warn!(
            "unrecognized module identifier 0x{:02x}",
            record.identifier.code()
        );
    } else if !record.identifier.is_sfp() {
        log::warn!(
            "module identifier 0x{:02x} ({}) is not SFP/SFP+",
            record.identifier.code(),
            record.identifier
        );
    }

    let mut report = make_stub_report(&path.display().to_string(), format, map.len() as u64);
    report.module = Some(build_module_summary(&record));
    Ok(report)
}
