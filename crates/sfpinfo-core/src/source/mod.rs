//! Transports that fetch raw EEPROM bytes from a module.
//!
//! A `ModuleBus` performs the SFF-8472 block read: write one register offset,
//! repeated start, then read sequential bytes. Transports only move bytes;
//! interpretation lives in `eeprom`. Retry policy is left to the caller.

pub mod dump;
mod i2c;
mod memory;

pub use dump::DumpFileSource;
pub use i2c::{BusConfig, HalBus};
pub use memory::MemoryBus;

use thiserror::Error;

/// Two-wire address of the serial ID map.
pub const A0_DEVICE_ADDRESS: u8 = 0x50;
/// Two-wire address of the diagnostics map (not decoded).
pub const A2_DEVICE_ADDRESS: u8 = 0x51;
/// Bytes addressable behind one device address.
pub const PAGE_SIZE: usize = 256;

pub trait ModuleBus {
    /// Read `buf.len()` bytes starting at `register_offset` from the device at
    /// `device_address`. Either the whole buffer is filled or an error is
    /// returned.
    fn read_block(
        &mut self,
        device_address: u8,
        register_offset: u8,
        buf: &mut [u8],
    ) -> Result<(), SourceError>;
}

impl<B: ModuleBus + ?Sized> ModuleBus for &mut B {
    fn read_block(
        &mut self,
        device_address: u8,
        register_offset: u8,
        buf: &mut [u8],
    ) -> Result<(), SourceError> {
        (**self).read_block(device_address, register_offset, buf)
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("dump error: {0}")]
    Dump(String),
    #[error("device 0x{address:02x} did not acknowledge")]
    NoAcknowledge { address: u8 },
    #[error("short transfer from 0x{address:02x}: requested {requested} bytes, got {transferred}")]
    ShortTransfer {
        address: u8,
        requested: usize,
        transferred: usize,
    },
    #[error("invalid transfer: offset {offset} with length {length}")]
    InvalidLength { offset: u8, length: usize },
    #[error("invalid bus configuration: {0}")]
    InvalidConfig(String),
    #[error("bus error: {0}")]
    Bus(String),
}

impl From<dump::error::DumpError> for SourceError {
    fn from(value: dump::error::DumpError) -> Self {
        match value {
            dump::error::DumpError::Io(err) => SourceError::Io(err),
            other => SourceError::Dump(other.to_string()),
        }
    }
}

/// Reject empty reads and reads running past the end of a page.
pub(crate) fn check_transfer(register_offset: u8, length: usize) -> Result<(), SourceError> {
    if length == 0 || usize::from(register_offset) + length > PAGE_SIZE {
        return Err(SourceError::InvalidLength {
            offset: register_offset,
            length,
        });
    }
    Ok(())
}
