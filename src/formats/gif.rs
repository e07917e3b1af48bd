use crate::core::{ByteSource, Endian, Result};
use crate::types::Dimension;

pub const GIF87A_SIGNATURE: [u8; 6] = *b"GIF87a";
pub const GIF89A_SIGNATURE: [u8; 6] = *b"GIF89a";

/// Reads the first two fields of the Logical Screen Descriptor.
pub fn decode(source: &mut dyn ByteSource) -> Result<Dimension> {
    let width = source.read_u16(Endian::Little)?;
    let height = source.read_u16(Endian::Little)?;
    Ok(Dimension::new(width, height))
}
