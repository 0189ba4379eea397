use crate::eeprom::a0::{DecodedModuleRecord, layout};
use crate::eeprom::common::LinkLength;
use crate::{IdentifierSummary, LengthSummary, ModuleSummary};

pub(crate) fn build_module_summary(record: &DecodedModuleRecord) -> ModuleSummary {
    let om4_or_copper_field = if record.is_copper { "copper" } else { "om4" };
    let lengths = vec![
        length_summary("smf", layout::LENGTH_SMF_100M_OFFSET, record.smf_length),
        length_summary("om2", layout::LENGTH_OM2_OFFSET, record.om2_length),
        length_summary("om1", layout::LENGTH_OM1_OFFSET, record.om1_length),
        length_summary(
            om4_or_copper_field,
            layout::LENGTH_OM4_OR_COPPER_OFFSET,
            record.om4_or_copper_length,
        ),
    ];

    ModuleSummary {
        identifier: IdentifierSummary {
            code: record.identifier.code(),
            name: record.identifier.name().to_string(),
            supported: record.identifier.is_sfp(),
        },
        medium: medium_name(record.is_copper).to_string(),
        lengths,
    }
}

fn medium_name(is_copper: bool) -> &'static str {
    if is_copper { "copper" } else { "fiber" }
}

fn length_summary(field: &str, offset: u8, length: LinkLength) -> LengthSummary {
    LengthSummary {
        field: field.to_string(),
        offset,
        status: length.status,
        meters: length.meters,
    }
}
