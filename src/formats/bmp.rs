use crate::core::{ByteSource, Result};
use crate::types::Dimension;

pub const BMP_SIGNATURE: [u8; 2] = [0x42, 0x4D];

/// File size, two reserved words, pixel-data offset and DIB header size.
const HEADER_SKIP: u64 = 16;

/// Reads the signed BITMAPINFOHEADER width and height.
///
/// Negative heights (top-down bitmaps) are returned unchanged.
pub fn decode(source: &mut dyn ByteSource) -> Result<Dimension> {
    source.skip(HEADER_SKIP)?;
    let width = source.read_i32_le()?;
    let height = source.read_i32_le()?;
    Ok(Dimension::new(width, height))
}
