use crate::core::{ByteSource, DecodeError, Endian, Result};
use crate::types::{Dimension, ImageFormat};

pub const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

pub const MARKER_PREFIX: u8 = 0xFF;
pub const SOF0_BASELINE: u8 = 0xC0;
pub const SOF2_PROGRESSIVE: u8 = 0xC2;

/// Walks the marker segments after SOI until a baseline or progressive
/// Start-Of-Frame is found.
///
/// Every other segment is skipped by its declared length, which counts the
/// two length bytes themselves. Running out of input before an SOF surfaces
/// as [`DecodeError::Truncated`].
pub fn decode(source: &mut dyn ByteSource) -> Result<Dimension> {
    loop {
        if source.read_u8()? != MARKER_PREFIX {
            return Err(DecodeError::malformed(
                ImageFormat::Jpeg,
                "segment does not start with a 0xFF marker prefix",
            ));
        }

        let marker = source.read_u8()?;
        let length = source.read_u16(Endian::Big)?;

        if marker == SOF0_BASELINE || marker == SOF2_PROGRESSIVE {
            // Sample precision precedes the frame size; height comes first.
            source.skip(1)?;
            let height = source.read_u16(Endian::Big)?;
            let width = source.read_u16(Endian::Big)?;
            return Ok(Dimension::new(width, height));
        }

        let payload = length.checked_sub(2).ok_or_else(|| {
            DecodeError::malformed(
                ImageFormat::Jpeg,
                "segment length shorter than its own length field",
            )
        })?;
        source.skip(u64::from(payload))?;
    }
}
