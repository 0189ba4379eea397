use super::{A0_DEVICE_ADDRESS, A2_DEVICE_ADDRESS, ModuleBus, SourceError, check_transfer};

/// Module image held in memory, answering reads like the EEPROM would.
///
/// Addresses other than 0x50/0x51 (or 0x51 when no A2h page is loaded) are
/// not acknowledged; reading past the stored bytes is a short transfer.
///
/// # Examples
/// ```
/// use sfpinfo_core::{MemoryBus, ModuleBus};
///
/// let mut bus = MemoryBus::new(vec![0x03; 64]);
/// let mut buf = [0u8; 4];
/// bus.read_block(0x50, 0, &mut buf)?;
/// assert_eq!(buf, [0x03; 4]);
/// # Ok::<(), sfpinfo_core::SourceError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryBus {
    a0: Vec<u8>,
    a2: Option<Vec<u8>>,
}

impl MemoryBus {
    pub fn new(a0: impl Into<Vec<u8>>) -> Self {
        Self {
            a0: a0.into(),
            a2: None,
        }
    }

    pub fn with_a2(mut self, a2: impl Into<Vec<u8>>) -> Self {
        self.a2 = Some(a2.into());
        self
    }

    pub fn a0(&self) -> &[u8] {
        &self.a0
    }

    pub fn a2(&self) -> Option<&[u8]> {
        self.a2.as_deref()
    }

    fn page(&self, device_address: u8) -> Option<&[u8]> {
        match device_address {
            A0_DEVICE_ADDRESS => Some(&self.a0),
            A2_DEVICE_ADDRESS => self.a2.as_deref(),
            _ => None,
        }
    }
}

impl ModuleBus for MemoryBus {
    fn read_block(
        &mut self,
        device_address: u8,
        register_offset: u8,
        buf: &mut [u8],
    ) -> Result<(), SourceError> {
        check_transfer(register_offset, buf.len())?;
        let page = self
            .page(device_address)
            .ok_or(SourceError::NoAcknowledge {
                address: device_address,
            })?;

        let start = usize::from(register_offset);
        let available = page.len().saturating_sub(start).min(buf.len());
        if available < buf.len() {
            log::debug!(
                "short read from 0x{:02x}: {} of {} bytes at offset {}",
                device_address,
                available,
                buf.len(),
                register_offset
            );
            return Err(SourceError::ShortTransfer {
                address: device_address,
                requested: buf.len(),
                transferred: available,
            });
        }

        buf.copy_from_slice(&page[start..start + buf.len()]);
        log::trace!(
            "read {} bytes from 0x{:02x} at offset {}",
            buf.len(),
            device_address,
            register_offset
        );
        Ok(())
    }
}
