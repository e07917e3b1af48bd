//! Image signatures and per-format header decoders.
//!
//! Each decoder is entered with the cursor positioned immediately after its
//! signature and reads only as far as it needs to produce a [`Dimension`].

pub mod bmp;
pub mod gif;
pub mod jpeg;
pub mod png;
pub mod tiff;
pub mod webp;

use crate::core::{ByteSource, Result};
use crate::types::{Dimension, ImageFormat};

/// Decoder entry point shared by every format.
pub type DecodeFn = fn(&mut dyn ByteSource) -> Result<Dimension>;

/// Magic bytes identifying a format, paired with the decoder to run on a match.
#[derive(Clone, Copy)]
pub struct Signature {
    pub magic: &'static [u8],
    pub format: ImageFormat,
    pub decode: DecodeFn,
}

impl Signature {
    pub const fn new(magic: &'static [u8], format: ImageFormat, decode: DecodeFn) -> Self {
        Self {
            magic,
            format,
            decode,
        }
    }

    /// True when `prefix` holds at least the signature's bytes and starts with them.
    pub fn matches(&self, prefix: &[u8]) -> bool {
        prefix.len() >= self.magic.len() && &prefix[..self.magic.len()] == self.magic
    }
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signature")
            .field("magic", &self.magic)
            .field("format", &self.format)
            .finish()
    }
}

/// Built-in signatures in dispatch order. The first match wins.
pub static SIGNATURES: [Signature; 8] = [
    Signature::new(&bmp::BMP_SIGNATURE, ImageFormat::Bmp, bmp::decode),
    Signature::new(&gif::GIF87A_SIGNATURE, ImageFormat::Gif, gif::decode),
    Signature::new(&gif::GIF89A_SIGNATURE, ImageFormat::Gif, gif::decode),
    Signature::new(&png::PNG_SIGNATURE, ImageFormat::Png, png::decode),
    Signature::new(&jpeg::JPEG_SOI, ImageFormat::Jpeg, jpeg::decode),
    Signature::new(&webp::RIFF_SIGNATURE, ImageFormat::WebP, webp::decode),
    Signature::new(&tiff::TIFF_LE_SIGNATURE, ImageFormat::Tiff, tiff::decode_little_endian),
    Signature::new(&tiff::TIFF_BE_SIGNATURE, ImageFormat::Tiff, tiff::decode_big_endian),
];

/// Longest signature length in `table`, i.e. how many bytes the dispatcher
/// may read before giving up.
pub fn lookahead(table: &[Signature]) -> usize {
    table.iter().map(|sig| sig.magic.len()).max().unwrap_or(0)
}
