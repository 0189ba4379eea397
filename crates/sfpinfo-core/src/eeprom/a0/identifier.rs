use std::fmt;

use super::layout;

/// Module type from A0h byte 0 (SFF-8024 identifier values).
///
/// Values outside the known set are kept as `Unknown(raw)` so an
/// unrecognized module never aliases a known type.
///
/// # Examples
/// ```
/// use sfpinfo_core::ModuleIdentifier;
///
/// assert_eq!(ModuleIdentifier::from_byte(0x03), ModuleIdentifier::Sfp);
/// assert_eq!(ModuleIdentifier::from_byte(0x7f), ModuleIdentifier::Unknown(0x7f));
/// assert_eq!(ModuleIdentifier::Sfp.to_string(), "SFP/SFP+");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleIdentifier {
    Gbic,
    Sfp,
    Qsfp,
    QsfpPlus,
    Qsfp28,
    Unknown(u8),
}

impl Default for ModuleIdentifier {
    fn default() -> Self {
        ModuleIdentifier::Unknown(0x00)
    }
}

impl ModuleIdentifier {
    pub fn from_byte(raw: u8) -> Self {
        match raw {
            layout::IDENTIFIER_GBIC => ModuleIdentifier::Gbic,
            layout::IDENTIFIER_SFP => ModuleIdentifier::Sfp,
            layout::IDENTIFIER_QSFP => ModuleIdentifier::Qsfp,
            layout::IDENTIFIER_QSFP_PLUS => ModuleIdentifier::QsfpPlus,
            layout::IDENTIFIER_QSFP28 => ModuleIdentifier::Qsfp28,
            other => ModuleIdentifier::Unknown(other),
        }
    }

    /// Raw identifier byte this variant was decoded from.
    pub fn code(self) -> u8 {
        match self {
            ModuleIdentifier::Gbic => layout::IDENTIFIER_GBIC,
            ModuleIdentifier::Sfp => layout::IDENTIFIER_SFP,
            ModuleIdentifier::Qsfp => layout::IDENTIFIER_QSFP,
            ModuleIdentifier::QsfpPlus => layout::IDENTIFIER_QSFP_PLUS,
            ModuleIdentifier::Qsfp28 => layout::IDENTIFIER_QSFP28,
            ModuleIdentifier::Unknown(raw) => raw,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ModuleIdentifier::Gbic => "GBIC",
            ModuleIdentifier::Sfp => "SFP/SFP+",
            ModuleIdentifier::Qsfp => "QSFP",
            ModuleIdentifier::QsfpPlus => "QSFP+",
            ModuleIdentifier::Qsfp28 => "QSFP28",
            ModuleIdentifier::Unknown(_) => "Unknown",
        }
    }

    pub fn is_known(self) -> bool {
        !matches!(self, ModuleIdentifier::Unknown(_))
    }

    /// Only SFP/SFP+ modules carry the A0h layout this crate decodes.
    pub fn is_sfp(self) -> bool {
        self == ModuleIdentifier::Sfp
    }
}

impl fmt::Display for ModuleIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
