use crate::core::{ByteSource, Endian, Result};
use crate::types::Dimension;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Length and type fields of the leading IHDR chunk.
const IHDR_PREFIX: u64 = 8;

/// Reads width and height from IHDR, which a valid PNG always has first.
/// The chunk type and CRC are not checked.
pub fn decode(source: &mut dyn ByteSource) -> Result<Dimension> {
    source.skip(IHDR_PREFIX)?;
    let width = source.read_u32(Endian::Big)?;
    let height = source.read_u32(Endian::Big)?;
    Ok(Dimension::new(width, height))
}
