use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};
use sfpinfo_core::{
    BusConfig, HalBus, LinkLength, MapSize, ModuleBus, ModuleIdentifier, SourceError, read_module,
};

/// EEPROM behind a fake I2C controller: a written byte sets the address
/// pointer, reads continue from it.
struct FakeEeprom {
    address: u8,
    memory: Vec<u8>,
    pointer: usize,
    fail_with: Option<ErrorKind>,
    transactions: usize,
}

impl FakeEeprom {
    fn new(memory: Vec<u8>) -> Self {
        Self {
            address: 0x50,
            memory,
            pointer: 0,
            fail_with: None,
            transactions: 0,
        }
    }
}

#[derive(Debug)]
struct FakeError(ErrorKind);

impl embedded_hal::i2c::Error for FakeError {
    fn kind(&self) -> ErrorKind {
        self.0
    }
}

impl ErrorType for FakeEeprom {
    type Error = FakeError;
}

impl I2c for FakeEeprom {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.transactions += 1;
        if let Some(kind) = self.fail_with {
            return Err(FakeError(kind));
        }
        if address != self.address {
            return Err(FakeError(ErrorKind::NoAcknowledge(
                NoAcknowledgeSource::Address,
            )));
        }
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    if let Some(offset) = bytes.first() {
                        self.pointer = usize::from(*offset);
                    }
                }
                Operation::Read(buf) => {
                    for byte in buf.iter_mut() {
                        *byte = self.memory.get(self.pointer).copied().unwrap_or(0xFF);
                        self.pointer += 1;
                    }
                }
            }
        }
        Ok(())
    }
}

fn sfp_memory() -> Vec<u8> {
    let mut memory = vec![0u8; 256];
    memory[0] = 0x03;
    memory[8] = 0x08;
    memory[18] = 0x05;
    memory
}

#[test]
fn reads_module_over_i2c() {
    let mut bus = HalBus::new(FakeEeprom::new(sfp_memory()), BusConfig::STANDARD).unwrap();
    let record = read_module(&mut bus, MapSize::Base).unwrap();
    assert_eq!(record.identifier, ModuleIdentifier::Sfp);
    assert!(record.is_copper);
    assert_eq!(record.om4_or_copper_length, LinkLength::valid(5));

    let fake = bus.release();
    assert_eq!(fake.transactions, 1);
}

#[test]
fn offset_is_sent_before_read() {
    let mut bus = HalBus::new(FakeEeprom::new(sfp_memory()), BusConfig::FAST).unwrap();
    let mut buf = [0u8; 2];
    bus.read_block(0x50, 17, &mut buf).unwrap();
    assert_eq!(buf, [0x00, 0x05]);
}

#[test]
fn absent_device_is_nack() {
    let mut bus = HalBus::new(FakeEeprom::new(sfp_memory()), BusConfig::default()).unwrap();
    let mut buf = [0u8; 1];
    let err = bus.read_block(0x51, 0, &mut buf).unwrap_err();
    assert!(matches!(err, SourceError::NoAcknowledge { address: 0x51 }));
}

#[test]
fn bus_fault_is_reported_and_not_decoded() {
    let mut fake = FakeEeprom::new(sfp_memory());
    fake.fail_with = Some(ErrorKind::ArbitrationLoss);
    let mut bus = HalBus::new(fake, BusConfig::default()).unwrap();
    let err = read_module(&mut bus, MapSize::Base).unwrap_err();
    assert!(matches!(err, SourceError::Bus(_)));
}

#[test]
fn invalid_config_rejected() {
    let result = HalBus::new(
        FakeEeprom::new(sfp_memory()),
        BusConfig {
            frequency_hz: 5_000_000,
        },
    );
    assert!(matches!(result, Err(SourceError::InvalidConfig(_))));
}

#[test]
fn transfer_limits_checked_before_bus_access() {
    let mut bus = HalBus::new(FakeEeprom::new(sfp_memory()), BusConfig::default()).unwrap();
    let mut buf = [0u8; 16];
    let err = bus.read_block(0x50, 0xF8, &mut buf).unwrap_err();
    assert!(matches!(err, SourceError::InvalidLength { .. }));
    assert_eq!(bus.release().transactions, 0);
}
