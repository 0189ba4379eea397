use std::fs;
use std::path::Path;

use crate::source::{MemoryBus, ModuleBus, SourceError};

use super::error::DumpError;
use super::layout;
use super::reader::{DumpFormat, parse_hex_text};

/// Dump contents split into pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpImage {
    pub a0: Vec<u8>,
    pub a2: Option<Vec<u8>>,
}

impl DumpImage {
    /// Split raw dump bytes: the first page is A0h, anything after it is A2h.
    pub fn from_bytes(mut bytes: Vec<u8>) -> Result<Self, DumpError> {
        if bytes.is_empty() {
            return Err(DumpError::Empty);
        }
        if bytes.len() > layout::MAX_DUMP_SIZE {
            return Err(DumpError::TooLarge {
                size: bytes.len(),
                max: layout::MAX_DUMP_SIZE,
            });
        }
        let a2 = if bytes.len() > layout::PAGE_SIZE {
            Some(bytes.split_off(layout::PAGE_SIZE))
        } else {
            None
        };
        Ok(Self { a0: bytes, a2 })
    }
}

/// `ModuleBus` backed by a dump file.
pub struct DumpFileSource {
    format: DumpFormat,
    bus: MemoryBus,
}

impl DumpFileSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let (format, image) = load_dump(path)?;
        log::debug!(
            "loaded {} dump {}: {} A0h bytes, A2h {}",
            format.as_str(),
            path.display(),
            image.a0.len(),
            if image.a2.is_some() { "present" } else { "absent" }
        );
        let mut bus = MemoryBus::new(image.a0);
        if let Some(a2) = image.a2 {
            bus = bus.with_a2(a2);
        }
        Ok(Self { format, bus })
    }

    pub fn format(&self) -> DumpFormat {
        self.format
    }

    pub fn into_bus(self) -> MemoryBus {
        self.bus
    }
}

impl ModuleBus for DumpFileSource {
    fn read_block(
        &mut self,
        device_address: u8,
        register_offset: u8,
        buf: &mut [u8],
    ) -> Result<(), SourceError> {
        self.bus.read_block(device_address, register_offset, buf)
    }
}

fn load_dump(path: &Path) -> Result<(DumpFormat, DumpImage), DumpError> {
    let format = DumpFormat::from_path(path).ok_or_else(|| DumpError::UnsupportedFormat {
        path: path.display().to_string(),
    })?;
    let max = match format {
        DumpFormat::Binary => layout::MAX_DUMP_SIZE,
        DumpFormat::HexText => layout::MAX_HEX_TEXT_SIZE,
    };
    check_file_size(path, max)?;
    let bytes = match format {
        DumpFormat::Binary => fs::read(path)?,
        DumpFormat::HexText => parse_hex_text(&fs::read_to_string(path)?)?,
    };
    Ok((format, DumpImage::from_bytes(bytes)?))
}

fn check_file_size(path: &Path, max: usize) -> Result<(), DumpError> {
    let size = usize::try_from(fs::metadata(path)?.len()).unwrap_or(usize::MAX);
    if size > max {
        return Err(DumpError::TooLarge { size, max });
    }
    Ok(())
}
