use super::error::A0Error;
use super::layout;

/// Raw A0h bytes as fetched from the module, never mutated afterwards.
///
/// The map may be shorter than a full page (64 bytes is the usual fetch,
/// 128 and 256 extend it). An empty map stands in for "no buffer": every
/// decoder treats it like a buffer too short for its field.
///
/// # Examples
/// ```
/// use sfpinfo_core::RawModuleMap;
///
/// let map = RawModuleMap::new(vec![0x03; 64]);
/// assert_eq!(map.len(), 64);
/// assert_eq!(map.reader().identifier_byte(), Ok(0x03));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawModuleMap {
    bytes: Vec<u8>,
}

impl RawModuleMap {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn reader(&self) -> A0Reader<'_> {
        A0Reader::new(&self.bytes)
    }
}

impl From<Vec<u8>> for RawModuleMap {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for RawModuleMap {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

/// Named, bounds-checked access to A0h fields.
pub struct A0Reader<'a> {
    map: &'a [u8],
}

impl<'a> A0Reader<'a> {
    pub fn new(map: &'a [u8]) -> Self {
        Self { map }
    }

    pub fn read_u8(&self, offset: u8) -> Result<u8, A0Error> {
        let offset = usize::from(offset);
        self.map.get(offset).copied().ok_or(A0Error::TooShort {
            needed: offset + 1,
            actual: self.map.len(),
        })
    }

    /// Byte 0, module identifier.
    pub fn identifier_byte(&self) -> Result<u8, A0Error> {
        self.read_u8(layout::IDENTIFIER_OFFSET)
    }

    /// Byte 8, SFP+ cable technology bits.
    pub fn cable_technology_byte(&self) -> Result<u8, A0Error> {
        self.read_u8(layout::CABLE_TECHNOLOGY_OFFSET)
    }

    /// Byte 15, single-mode length in 100 m units.
    pub fn smf_length_byte(&self) -> Result<u8, A0Error> {
        self.read_u8(layout::LENGTH_SMF_100M_OFFSET)
    }

    /// Byte 16, 50 um OM2 length in 10 m units.
    pub fn om2_length_byte(&self) -> Result<u8, A0Error> {
        self.read_u8(layout::LENGTH_OM2_OFFSET)
    }

    /// Byte 17, 62.5 um OM1 length in 10 m units.
    pub fn om1_length_byte(&self) -> Result<u8, A0Error> {
        self.read_u8(layout::LENGTH_OM1_OFFSET)
    }

    /// Byte 18, OM4 length (10 m units) or copper cable length (1 m units).
    pub fn om4_or_copper_length_byte(&self) -> Result<u8, A0Error> {
        self.read_u8(layout::LENGTH_OM4_OR_COPPER_OFFSET)
    }
}
