use serde::{Deserialize, Serialize};

/// Raw value meaning "no length information".
pub const LENGTH_NOT_SPECIFIED: u8 = 0x00;
/// Raw value meaning "longer than the field can express".
pub const LENGTH_EXTENDED: u8 = 0xFF;

/// Validity of a decoded link length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthStatus {
    /// Raw byte was 0x00; the module carries no data for this field.
    #[default]
    NotSpecified,
    /// Raw byte was 0x01..=0xFE; the value is exact.
    Valid,
    /// Raw byte was 0xFF; the value is a lower bound.
    Extended,
}

impl LengthStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            LengthStatus::NotSpecified => "not_specified",
            LengthStatus::Valid => "valid",
            LengthStatus::Extended => "extended",
        }
    }
}

/// Link length in metres paired with its validity status.
///
/// `NotSpecified` always carries 0 m, and 0 m here means "no data", not a
/// zero-length link. `Extended` carries the lower bound implied by the 0xFF
/// sentinel.
///
/// # Examples
/// ```
/// use sfpinfo_core::{LengthStatus, LinkLength};
///
/// let len = LinkLength::not_specified();
/// assert_eq!(len.meters, 0);
/// assert_eq!(len.status, LengthStatus::NotSpecified);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LinkLength {
    pub meters: u16,
    pub status: LengthStatus,
}

impl LinkLength {
    pub const fn not_specified() -> Self {
        Self {
            meters: 0,
            status: LengthStatus::NotSpecified,
        }
    }

    pub const fn valid(meters: u16) -> Self {
        Self {
            meters,
            status: LengthStatus::Valid,
        }
    }

    pub const fn extended(lower_bound_m: u16) -> Self {
        Self {
            meters: lower_bound_m,
            status: LengthStatus::Extended,
        }
    }
}

/// Decode a single-byte length field expressed in `unit_m` metre units.
///
/// 0x00 maps to `NotSpecified`, 0xFF to `Extended` with a lower bound of
/// `254 * unit_m`, and everything in between to `Valid` with `raw * unit_m`.
/// A product that does not fit `u16` saturates to an `Extended` length of
/// `u16::MAX` metres, so coarse units (km fields) never overflow.
///
/// # Examples
/// ```
/// use sfpinfo_core::{LengthStatus, decode_length_byte};
///
/// assert_eq!(decode_length_byte(0x19, 10).meters, 250);
/// assert_eq!(decode_length_byte(0xFF, 10).status, LengthStatus::Extended);
/// ```
pub fn decode_length_byte(raw: u8, unit_m: u16) -> LinkLength {
    match raw {
        LENGTH_NOT_SPECIFIED => LinkLength::not_specified(),
        LENGTH_EXTENDED => {
            LinkLength::extended(u16::from(LENGTH_EXTENDED - 1).saturating_mul(unit_m))
        }
        value => match u16::from(value).checked_mul(unit_m) {
            Some(meters) => LinkLength::valid(meters),
            None => LinkLength::extended(u16::MAX),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_specified() {
        assert_eq!(decode_length_byte(0x00, 10), LinkLength::not_specified());
        assert_eq!(decode_length_byte(0x00, 1), LinkLength::not_specified());
    }

    #[test]
    fn sentinel_ff_is_lower_bound() {
        assert_eq!(decode_length_byte(0xFF, 10), LinkLength::extended(2540));
        assert_eq!(decode_length_byte(0xFF, 1), LinkLength::extended(254));
        assert_eq!(decode_length_byte(0xFF, 100), LinkLength::extended(25400));
    }

    #[test]
    fn valid_range_scales_by_unit() {
        for raw in 0x01..=0xFEu8 {
            let len = decode_length_byte(raw, 10);
            assert_eq!(len, LinkLength::valid(u16::from(raw) * 10));
        }
    }

    #[test]
    fn fe_and_ff_share_magnitude_but_not_status() {
        let max = decode_length_byte(0xFE, 10);
        let ext = decode_length_byte(0xFF, 10);
        assert_eq!(max.meters, ext.meters);
        assert_eq!(max.status, LengthStatus::Valid);
        assert_eq!(ext.status, LengthStatus::Extended);
    }

    #[test]
    fn oversized_unit_saturates_to_extended() {
        assert_eq!(decode_length_byte(0xFF, 1000), LinkLength::extended(u16::MAX));
        assert_eq!(decode_length_byte(0xFE, 1000), LinkLength::extended(u16::MAX));
        assert_eq!(decode_length_byte(0x41, 1000), LinkLength::valid(65000));
        assert_eq!(decode_length_byte(0x42, 1000), LinkLength::extended(u16::MAX));
        assert_eq!(decode_length_byte(0xFE, 258), LinkLength::valid(65532));
        assert_eq!(decode_length_byte(0xFF, u16::MAX), LinkLength::extended(u16::MAX));
    }

    #[test]
    fn status_serializes_snake_case() {
        let value = serde_json::to_value(LengthStatus::NotSpecified).expect("status json");
        assert_eq!(value, "not_specified");
        assert_eq!(LengthStatus::Extended.as_str(), "extended");
    }
}
