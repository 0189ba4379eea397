pub const PAGE_SIZE: usize = crate::source::PAGE_SIZE;
/// A0h page followed by the A2h page.
pub const MAX_DUMP_SIZE: usize = 2 * PAGE_SIZE;
/// Upper bound on a hex text dump file: offset-prefixed lines plus headers.
pub const MAX_HEX_TEXT_SIZE: usize = 4 * MAX_DUMP_SIZE + 4096;

pub const HEX_BYTES_PER_LINE: usize = 16;
pub const COMMENT_PREFIX: char = '#';
pub const OFFSET_SUFFIX: char = ':';

pub const BINARY_EXTENSIONS: [&str; 2] = ["bin", "eeprom"];
pub const HEX_EXTENSIONS: [&str; 2] = ["hex", "txt"];
