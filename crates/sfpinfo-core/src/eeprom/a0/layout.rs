pub const IDENTIFIER_OFFSET: u8 = 0;

/// Transceiver compliance byte 8: SFP+ cable technology.
pub const CABLE_TECHNOLOGY_OFFSET: u8 = 8;
pub const PASSIVE_CABLE_BIT: u8 = 1 << 2;
pub const ACTIVE_CABLE_BIT: u8 = 1 << 3;
pub const COPPER_CABLE_MASK: u8 = PASSIVE_CABLE_BIT | ACTIVE_CABLE_BIT;

pub const LENGTH_SMF_100M_OFFSET: u8 = 15;
pub const LENGTH_OM2_OFFSET: u8 = 16;
pub const LENGTH_OM1_OFFSET: u8 = 17;
pub const LENGTH_OM4_OR_COPPER_OFFSET: u8 = 18;

pub const SMF_UNIT_M: u16 = 100;
pub const OM2_UNIT_M: u16 = 10;
pub const OM1_UNIT_M: u16 = 10;
pub const OM4_UNIT_M: u16 = 10;
pub const COPPER_UNIT_M: u16 = 1;

pub const IDENTIFIER_GBIC: u8 = 0x02;
pub const IDENTIFIER_SFP: u8 = 0x03;
pub const IDENTIFIER_QSFP: u8 = 0x0C;
pub const IDENTIFIER_QSFP_PLUS: u8 = 0x11;
pub const IDENTIFIER_QSFP28: u8 = 0x18;

/// Base ID fields, bytes 0..=63 (ends with CC_BASE).
pub const BASE_SIZE: usize = 64;
/// Base plus extended ID fields, bytes 0..=127.
pub const EXTENDED_SIZE: usize = 128;
/// Whole A0h page including vendor-specific and reserved bytes.
pub const FULL_SIZE: usize = 256;
