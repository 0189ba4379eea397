use thiserror::Error;

/// Errors returned by bounds-checked A0h reads.
///
/// Decoders never surface this type; they fold it into the field's safe
/// default. It is exposed for callers that use `A0Reader` directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum A0Error {
    #[error("module map too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
}
