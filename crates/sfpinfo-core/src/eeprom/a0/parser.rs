use super::identifier::ModuleIdentifier;
use super::layout;
use super::reader::RawModuleMap;
use crate::eeprom::common::{LinkLength, decode_length_byte};

/// Decoded view of one A0h read cycle.
///
/// Built fresh from a `RawModuleMap`; fields that were not decoded keep their
/// `Default` value (unknown identifier, unspecified lengths, fiber medium).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodedModuleRecord {
    pub identifier: ModuleIdentifier,
    pub is_copper: bool,
    pub smf_length: LinkLength,
    pub om2_length: LinkLength,
    pub om1_length: LinkLength,
    pub om4_or_copper_length: LinkLength,
}

/// Byte 0. A missing byte decodes as `Unknown(0x00)`.
pub fn decode_identifier(raw: &RawModuleMap) -> ModuleIdentifier {
    raw.reader()
        .identifier_byte()
        .map(ModuleIdentifier::from_byte)
        .unwrap_or_default()
}

/// Byte 17, 62.5 um OM1 in 10 m units.
pub fn decode_om1_length(raw: &RawModuleMap) -> LinkLength {
    raw.reader()
        .om1_length_byte()
        .map(|b| decode_length_byte(b, layout::OM1_UNIT_M))
        .unwrap_or_default()
}

/// Byte 16, 50 um OM2 in 10 m units.
pub fn decode_om2_length(raw: &RawModuleMap) -> LinkLength {
    raw.reader()
        .om2_length_byte()
        .map(|b| decode_length_byte(b, layout::OM2_UNIT_M))
        .unwrap_or_default()
}

/// Byte 15, single-mode fiber in 100 m units.
pub fn decode_smf_length(raw: &RawModuleMap) -> LinkLength {
    raw.reader()
        .smf_length_byte()
        .map(|b| decode_length_byte(b, layout::SMF_UNIT_M))
        .unwrap_or_default()
}

/// Byte 8: passive (bit 2) or active (bit 3) copper cable.
///
/// # Examples
/// ```
/// use sfpinfo_core::{RawModuleMap, is_copper_medium};
///
/// let mut bytes = vec![0u8; 64];
/// bytes[8] = 0x04;
/// assert!(is_copper_medium(&RawModuleMap::new(bytes)));
/// ```
pub fn is_copper_medium(raw: &RawModuleMap) -> bool {
    raw.reader()
        .cable_technology_byte()
        .map(|b| b & layout::COPPER_CABLE_MASK != 0)
        .unwrap_or(false)
}

/// Byte 18. Copper cables use 1 m units, OM4 fiber uses 10 m units, so the
/// medium must be classified first.
///
/// # Examples
/// ```
/// use sfpinfo_core::{LinkLength, RawModuleMap, decode_om4_or_copper_length};
///
/// let mut bytes = vec![0u8; 64];
/// bytes[18] = 0xFF;
/// let map = RawModuleMap::new(bytes);
/// assert_eq!(decode_om4_or_copper_length(&map, true), LinkLength::extended(254));
/// assert_eq!(decode_om4_or_copper_length(&map, false), LinkLength::extended(2540));
/// ```
pub fn decode_om4_or_copper_length(raw: &RawModuleMap, is_copper: bool) -> LinkLength {
    let unit_m = if is_copper {
        layout::COPPER_UNIT_M
    } else {
        layout::OM4_UNIT_M
    };
    raw.reader()
        .om4_or_copper_length_byte()
        .map(|b| decode_length_byte(b, unit_m))
        .unwrap_or_default()
}

/// Run every field decoder over `raw`, classifying the medium before the
/// byte 18 length.
pub fn decode_module(raw: &RawModuleMap) -> DecodedModuleRecord {
    let identifier = decode_identifier(raw);
    let is_copper = is_copper_medium(raw);
    DecodedModuleRecord {
        identifier,
        is_copper,
        smf_length: decode_smf_length(raw),
        om2_length: decode_om2_length(raw),
        om1_length: decode_om1_length(raw),
        om4_or_copper_length: decode_om4_or_copper_length(raw, is_copper),
    }
}
