pub(crate) mod length;

pub use length::{LengthStatus, LinkLength, decode_length_byte};
