use thiserror::Error;

#[derive(Debug, Error)]
pub enum DumpError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported dump format: {path}")]
    UnsupportedFormat { path: String },
    #[error("dump is empty")]
    Empty,
    #[error("dump too large: {size} bytes, at most {max} allowed")]
    TooLarge { size: usize, max: usize },
    #[error("invalid hex byte '{token}' on line {line}")]
    InvalidHex { line: usize, token: String },
    #[error("offset mismatch on line {line}: expected {expected:02X}, found {found:02X}")]
    OffsetMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
}
