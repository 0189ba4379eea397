//! EEPROM memory-map decoding.
//!
//! Each map follows a layered structure:
//! - `layout`: byte offsets, bit positions and sizes (source of truth)
//! - `reader`: owned raw map plus bounds-checked, named field access
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `error`: explicit errors for direct reader use
//!
//! Decoders are pure and total: they perform no I/O and fold a missing or
//! truncated field into that field's documented default instead of failing.
//! Transports live in `source`.

pub mod a0;
pub(crate) mod common;
