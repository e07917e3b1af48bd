//! TIFF image file directory scan.
//!
//! The little-endian signature is `II*` and is followed by a zero byte; the
//! big-endian signature `MM\0*` already covers the full magic number. Both
//! are then followed by the 4-byte absolute offset of the first IFD.

use crate::core::{ByteSource, DecodeError, Endian, Result};
use crate::types::{Dimension, ImageFormat};

pub const TIFF_LE_SIGNATURE: [u8; 3] = [0x49, 0x49, 0x2A];
pub const TIFF_BE_SIGNATURE: [u8; 4] = [0x4D, 0x4D, 0x00, 0x2A];

pub const TAG_IMAGE_WIDTH: u16 = 256;
pub const TAG_IMAGE_LENGTH: u16 = 257;

/// Bytes left in a 12-byte IFD entry after the tag.
const ENTRY_REMAINDER: u64 = 10;
/// Field type and count, between the tag and the value.
const TYPE_AND_COUNT: u64 = 6;

pub fn decode_little_endian(source: &mut dyn ByteSource) -> Result<Dimension> {
    if source.read_u8()? != 0 {
        return Err(DecodeError::malformed(
            ImageFormat::Tiff,
            "non-zero high byte in little-endian magic number",
        ));
    }
    decode_ifd(source, Endian::Little)
}

pub fn decode_big_endian(source: &mut dyn ByteSource) -> Result<Dimension> {
    decode_ifd(source, Endian::Big)
}

/// Scans the first IFD for ImageWidth and ImageLength.
///
/// Both values are always read as 4-byte integers regardless of the entry's
/// declared type, so a big-endian SHORT value comes back shifted into the
/// upper half. Scanning stops as soon as both tags have been seen.
fn decode_ifd(source: &mut dyn ByteSource, endian: Endian) -> Result<Dimension> {
    let ifd_offset = source.read_u32(endian)?;
    source.seek_to(u64::from(ifd_offset))?;

    let entry_count = source.read_u16(endian)?;
    let mut width = None;
    let mut height = None;

    for _ in 0..entry_count {
        match source.read_u16(endian)? {
            TAG_IMAGE_WIDTH => {
                source.skip(TYPE_AND_COUNT)?;
                width = Some(source.read_u32(endian)?);
            }
            TAG_IMAGE_LENGTH => {
                source.skip(TYPE_AND_COUNT)?;
                height = Some(source.read_u32(endian)?);
            }
            _ => source.skip(ENTRY_REMAINDER)?,
        }

        if let (Some(width), Some(height)) = (width, height) {
            return Ok(Dimension::new(width, height));
        }
    }

    Err(DecodeError::malformed(
        ImageFormat::Tiff,
        "IFD has no ImageWidth and ImageLength entries",
    ))
}
