//! WebP lives inside a RIFF container: `RIFF <size> WEBP <chunk>`.
//! The first chunk tag selects one of three header layouts.

use std::io::Read;

use crate::core::{ByteSource, DecodeError, Endian, Result};
use crate::types::{Dimension, ImageFormat};

pub const RIFF_SIGNATURE: [u8; 4] = *b"RIFF";
pub const WEBP_TAG: [u8; 4] = *b"WEBP";

pub const VP8_TAG: [u8; 4] = *b"VP8 ";
pub const VP8L_TAG: [u8; 4] = *b"VP8L";
pub const VP8X_TAG: [u8; 4] = *b"VP8X";

/// `9D 01 2A` read as a little-endian 24-bit integer.
pub const VP8_START_CODE: u32 = 0x2A_01_9D;
pub const VP8L_SIGNATURE: u8 = 0x2F;

pub fn decode(source: &mut dyn ByteSource) -> Result<Dimension> {
    // RIFF chunk size
    source.skip(4)?;
    if source.read_tag()? != WEBP_TAG {
        return Err(DecodeError::malformed(ImageFormat::WebP, "RIFF form type is not WEBP"));
    }

    match source.read_tag()? {
        VP8_TAG => decode_lossy(source),
        VP8L_TAG => decode_lossless(source),
        VP8X_TAG => decode_extended(source),
        _ => Err(DecodeError::malformed(ImageFormat::WebP, "unknown WebP chunk")),
    }
}

/// Simple lossy layout.
///
/// The 16-bit size fields are returned raw: the two horizontal and vertical
/// scale bits in the top of each field are not masked off.
fn decode_lossy(source: &mut dyn ByteSource) -> Result<Dimension> {
    // Chunk size (4) + frame tag (3).
    source.skip(7)?;
    if source.read_u24_le()? != VP8_START_CODE {
        return Err(DecodeError::malformed(ImageFormat::WebP, "missing VP8 start code"));
    }

    let width = source.read_u16(Endian::Little)?;
    let height = source.read_u16(Endian::Little)?;
    Ok(Dimension::new(width, height))
}

/// Lossless layout: two 14-bit minus-one fields packed little-endian across
/// four bytes.
fn decode_lossless(source: &mut dyn ByteSource) -> Result<Dimension> {
    source.skip(4)?;
    if source.read_u8()? != VP8L_SIGNATURE {
        return Err(DecodeError::malformed(ImageFormat::WebP, "missing VP8L signature byte"));
    }

    let mut bits = [0u8; 4];
    source.read_exact(&mut bits)?;
    Ok(unpack_lossless_size(bits))
}

/// Unpacks the VP8L image size from the four bytes after the signature byte.
///
/// Width is the low 14 bits plus one. Height takes the next bits and is not
/// masked to 14, so bits belonging to the alpha and version fields in the
/// last byte flow into it.
pub fn unpack_lossless_size(bits: [u8; 4]) -> Dimension {
    let [b0, b1, b2, b3] = bits.map(u32::from);
    let width = 1 + (((b1 & 0x3F) << 8) | b0);
    let height = 1 + ((b3 << 10) | (b2 << 2) | ((b1 & 0xC0) >> 6));
    Dimension::new(width, height)
}

/// Extended layout: 24-bit minus-one canvas width and height after the flags.
fn decode_extended(source: &mut dyn ByteSource) -> Result<Dimension> {
    // Chunk size (4) + flags and reserved (4).
    source.skip(8)?;
    let width = source.read_u24_le()? + 1;
    let height = source.read_u24_le()? + 1;
    Ok(Dimension::new(width, height))
}
