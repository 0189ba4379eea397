use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

use super::{ModuleBus, SourceError, check_transfer};

/// Highest clock rate the module management interface is specified for.
pub const MAX_FREQUENCY_HZ: u32 = 1_000_000;

/// Two-wire bus settings. Pin muxing is done by the HAL that builds the
/// `I2c` value; this only carries what the transport checks and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusConfig {
    pub frequency_hz: u32,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl BusConfig {
    /// Standard mode (100 kHz), what SFP modules are required to support.
    pub const STANDARD: Self = Self {
        frequency_hz: 100_000,
    };
    pub const FAST: Self = Self {
        frequency_hz: 400_000,
    };
    pub const FAST_PLUS: Self = Self {
        frequency_hz: MAX_FREQUENCY_HZ,
    };

    pub fn validate(&self) -> Result<(), SourceError> {
        if self.frequency_hz == 0 || self.frequency_hz > MAX_FREQUENCY_HZ {
            return Err(SourceError::InvalidConfig(format!(
                "frequency {} Hz outside 1..={} Hz",
                self.frequency_hz, MAX_FREQUENCY_HZ
            )));
        }
        Ok(())
    }
}

/// `ModuleBus` over any blocking `embedded-hal` I2C implementation.
pub struct HalBus<I> {
    i2c: I,
    config: BusConfig,
}

impl<I: I2c> HalBus<I> {
    pub fn new(i2c: I, config: BusConfig) -> Result<Self, SourceError> {
        config.validate()?;
        log::debug!("module bus ready at {} Hz", config.frequency_hz);
        Ok(Self { i2c, config })
    }

    pub fn config(&self) -> BusConfig {
        self.config
    }

    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> ModuleBus for HalBus<I> {
    fn read_block(
        &mut self,
        device_address: u8,
        register_offset: u8,
        buf: &mut [u8],
    ) -> Result<(), SourceError> {
        check_transfer(register_offset, buf.len())?;
        self.i2c
            .write_read(device_address, &[register_offset], buf)
            .map_err(|err| match err.kind() {
                ErrorKind::NoAcknowledge(_) => SourceError::NoAcknowledge {
                    address: device_address,
                },
                kind => SourceError::Bus(format!("{kind:?}")),
            })?;
        log::trace!(
            "read {} bytes from 0x{:02x} at offset {}",
            buf.len(),
            device_address,
            register_offset
        );
        Ok(())
    }
}
