use std::fmt::Write as _;
use std::path::Path;

use super::error::DumpError;
use super::layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpFormat {
    Binary,
    HexText,
}

impl DumpFormat {
    /// Pick the format from the file extension (case-insensitive).
    ///
    /// # Examples
    /// ```
    /// use std::path::Path;
    /// use sfpinfo_core::DumpFormat;
    ///
    /// assert_eq!(DumpFormat::from_path(Path::new("sfp.BIN")), Some(DumpFormat::Binary));
    /// assert_eq!(DumpFormat::from_path(Path::new("sfp.hex")), Some(DumpFormat::HexText));
    /// assert_eq!(DumpFormat::from_path(Path::new("sfp.json")), None);
    /// ```
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())?
            .to_ascii_lowercase();
        if layout::BINARY_EXTENSIONS.contains(&ext.as_str()) {
            Some(DumpFormat::Binary)
        } else if layout::HEX_EXTENSIONS.contains(&ext.as_str()) {
            Some(DumpFormat::HexText)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DumpFormat::Binary => "binary",
            DumpFormat::HexText => "hex",
        }
    }
}

/// Parse a hex text dump into bytes.
///
/// Blank lines and `#` comments are skipped. A leading `OFFSET:` token is
/// optional but, when present, must equal the number of bytes read so far.
///
/// # Errors
/// `DumpError::InvalidHex` for anything that is not a two-digit hex byte and
/// `DumpError::OffsetMismatch` for a prefix that skips or repeats bytes.
pub fn parse_hex_text(text: &str) -> Result<Vec<u8>, DumpError> {
    let mut bytes = Vec::new();
    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line
            .split(layout::COMMENT_PREFIX)
            .next()
            .unwrap_or("")
            .trim();
        if line.is_empty() {
            continue;
        }

        let mut tokens = line.split_whitespace().peekable();
        let first = tokens.peek().copied();
        if let Some(prefix) = first.and_then(|token| token.strip_suffix(layout::OFFSET_SUFFIX)) {
            let found = usize::from_str_radix(prefix, 16).map_err(|_| DumpError::InvalidHex {
                line: line_no,
                token: prefix.to_string(),
            })?;
            if found != bytes.len() {
                return Err(DumpError::OffsetMismatch {
                    line: line_no,
                    expected: bytes.len(),
                    found,
                });
            }
            tokens.next();
        }

        for token in tokens {
            bytes.push(parse_hex_byte(token).ok_or_else(|| DumpError::InvalidHex {
                line: line_no,
                token: token.to_string(),
            })?);
        }
    }
    Ok(bytes)
}

fn parse_hex_byte(token: &str) -> Option<u8> {
    if token.len() != 2 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(token, 16).ok()
}

/// Render bytes as 16-per-line hex with an offset prefix.
///
/// # Examples
/// ```
/// use sfpinfo_core::format_hex_dump;
///
/// assert_eq!(format_hex_dump(&[0x03, 0x04, 0x07]), "00: 03 04 07\n");
/// ```
pub fn format_hex_dump(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (line, chunk) in bytes.chunks(layout::HEX_BYTES_PER_LINE).enumerate() {
        let _ = write!(out, "{:02X}:", line * layout::HEX_BYTES_PER_LINE);
        for byte in chunk {
            let _ = write!(out, " {:02X}", byte);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{format_hex_dump, parse_hex_text};
    use crate::source::dump::error::DumpError;

    #[test]
    fn parses_plain_bytes() {
        let bytes = parse_hex_text("03 04 07\n00 00").unwrap();
        assert_eq!(bytes, vec![0x03, 0x04, 0x07, 0x00, 0x00]);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let text = "# A0h dump\n\n00: 03 04 # identifier, ext id\n02: 07\n";
        assert_eq!(parse_hex_text(text).unwrap(), vec![0x03, 0x04, 0x07]);
    }

    #[test]
    fn rejects_offset_gap() {
        let err = parse_hex_text("00: 03 04\n10: 07").unwrap_err();
        assert!(matches!(
            err,
            DumpError::OffsetMismatch {
                line: 2,
                expected: 2,
                found: 0x10
            }
        ));
    }

    #[test]
    fn rejects_bad_tokens() {
        for text in ["0x03", "3", "zz", "+1", "030"] {
            let err = parse_hex_text(text).unwrap_err();
            assert!(matches!(err, DumpError::InvalidHex { line: 1, .. }), "{text}");
        }
    }

    #[test]
    fn formatted_dump_parses_back() {
        let bytes: Vec<u8> = (0..40u8).collect();
        let text = format_hex_dump(&bytes);
        assert_eq!(text.lines().count(), 3);
        assert!(text.starts_with("00: 00 01 02"));
        assert!(text.contains("\n20: 20 21"));
        assert_eq!(parse_hex_text(&text).unwrap(), bytes);
    }
}
