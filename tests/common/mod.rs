//! Header fixture builders shared by the integration tests.
#![allow(dead_code)]

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

pub fn make_bmp(width: i32, height: i32) -> Vec<u8> {
    let mut data = b"BM".to_vec();
    data.extend_from_slice(&70u32.to_le_bytes()); // file size
    data.extend_from_slice(&[0u8; 4]); // reserved
    data.extend_from_slice(&54u32.to_le_bytes()); // pixel data offset
    data.extend_from_slice(&40u32.to_le_bytes()); // BITMAPINFOHEADER size
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes()); // planes
    data.extend_from_slice(&24u16.to_le_bytes()); // bpp
    data.extend_from_slice(&[0u8; 24]);
    data
}

pub fn make_gif(signature: &[u8; 6], width: u16, height: u16) -> Vec<u8> {
    let mut data = signature.to_vec();
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    data.extend_from_slice(&[0xF7, 0x00, 0x00]); // flags, background, aspect
    data.extend_from_slice(&[0x00, 0x3B]);
    data
}

pub fn make_png_chunk(chunk_type: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut chunk = Vec::new();
    chunk.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    chunk.extend_from_slice(chunk_type);
    chunk.extend_from_slice(payload);
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(payload);
    chunk.extend_from_slice(&hasher.finalize().to_be_bytes());
    chunk
}

pub fn make_png(width: u32, height: u32) -> Vec<u8> {
    let mut ihdr = Vec::new();
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[8, 2, 0, 0, 0]);

    let mut data = PNG_SIGNATURE.to_vec();
    data.extend_from_slice(&make_png_chunk(b"IHDR", &ihdr));
    data.extend_from_slice(&make_png_chunk(b"IEND", &[]));
    data
}

pub fn jpeg_segment(marker: u8, payload: &[u8]) -> Vec<u8> {
    let mut segment = vec![0xFF, marker];
    segment.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
    segment.extend_from_slice(payload);
    segment
}

pub fn jfif_app0() -> Vec<u8> {
    jpeg_segment(0xE0, b"JFIF\x00\x01\x01\x00\x00\x48\x00\x48\x00\x00")
}

pub fn sof_segment(marker: u8, width: u16, height: u16) -> Vec<u8> {
    let mut payload = vec![0x08];
    payload.extend_from_slice(&height.to_be_bytes());
    payload.extend_from_slice(&width.to_be_bytes());
    payload.extend_from_slice(&[0x03, 0x01, 0x22, 0x00, 0x02, 0x11, 0x01, 0x03, 0x11, 0x01]);
    jpeg_segment(marker, &payload)
}

/// SOI, then each segment in order.
pub fn make_jpeg(segments: &[Vec<u8>]) -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8];
    for segment in segments {
        data.extend_from_slice(segment);
    }
    data
}

fn riff_webp(chunk_tag: &[u8; 4], chunk: &[u8]) -> Vec<u8> {
    let mut data = b"RIFF".to_vec();
    data.extend_from_slice(&((chunk.len() + 12) as u32).to_le_bytes());
    data.extend_from_slice(b"WEBP");
    data.extend_from_slice(chunk_tag);
    data.extend_from_slice(&(chunk.len() as u32).to_le_bytes());
    data.extend_from_slice(chunk);
    data
}

/// Lossy layout with raw 16-bit size fields, scale bits included.
pub fn make_webp_lossy(width_field: u16, height_field: u16) -> Vec<u8> {
    let mut chunk = vec![0x50, 0x05, 0x00]; // frame tag
    chunk.extend_from_slice(&[0x9D, 0x01, 0x2A]);
    chunk.extend_from_slice(&width_field.to_le_bytes());
    chunk.extend_from_slice(&height_field.to_le_bytes());
    chunk.extend_from_slice(&[0u8; 8]);
    riff_webp(b"VP8 ", &chunk)
}

/// Lossless layout from the four raw size bytes after the 0x2F signature.
pub fn make_webp_lossless_raw(bits: [u8; 4]) -> Vec<u8> {
    let mut chunk = vec![0x2F];
    chunk.extend_from_slice(&bits);
    chunk.extend_from_slice(&[0u8; 4]);
    riff_webp(b"VP8L", &chunk)
}

/// Lossless layout for a 14-bit width and height with alpha and version zero.
pub fn make_webp_lossless(width: u32, height: u32) -> Vec<u8> {
    let packed = (width - 1) | ((height - 1) << 14);
    make_webp_lossless_raw(packed.to_le_bytes())
}

pub fn make_webp_extended(width: u32, height: u32) -> Vec<u8> {
    let mut chunk = vec![0x10, 0x00, 0x00, 0x00]; // flags + reserved
    chunk.extend_from_slice(&(width - 1).to_le_bytes()[..3]);
    chunk.extend_from_slice(&(height - 1).to_le_bytes()[..3]);
    riff_webp(b"VP8X", &chunk)
}

pub const TIFF_SHORT: u16 = 3;
pub const TIFF_LONG: u16 = 4;

/// One 12-byte IFD entry: tag, field type, count, value.
#[derive(Debug, Clone, Copy)]
pub struct IfdEntry {
    pub tag: u16,
    pub field_type: u16,
    pub value: u32,
}

impl IfdEntry {
    pub fn long(tag: u16, value: u32) -> Self {
        Self {
            tag,
            field_type: TIFF_LONG,
            value,
        }
    }

    pub fn short(tag: u16, value: u16) -> Self {
        Self {
            tag,
            field_type: TIFF_SHORT,
            value: u32::from(value),
        }
    }
}

/// TIFF with the first IFD placed `padding` bytes after the 8-byte header.
pub fn make_tiff(little_endian: bool, padding: usize, entries: &[IfdEntry]) -> Vec<u8> {
    let u16_bytes = |v: u16| {
        if little_endian {
            v.to_le_bytes()
        } else {
            v.to_be_bytes()
        }
    };
    let u32_bytes = |v: u32| {
        if little_endian {
            v.to_le_bytes()
        } else {
            v.to_be_bytes()
        }
    };

    let mut data = if little_endian {
        vec![0x49, 0x49, 0x2A, 0x00]
    } else {
        vec![0x4D, 0x4D, 0x00, 0x2A]
    };
    data.extend_from_slice(&u32_bytes((8 + padding) as u32));
    data.extend(std::iter::repeat_n(0xEEu8, padding));
    data.extend_from_slice(&u16_bytes(entries.len() as u16));

    for entry in entries {
        data.extend_from_slice(&u16_bytes(entry.tag));
        data.extend_from_slice(&u16_bytes(entry.field_type));
        data.extend_from_slice(&u32_bytes(1));
        if entry.field_type == TIFF_SHORT {
            // SHORT values sit left-justified in the 4-byte value field.
            data.extend_from_slice(&u16_bytes(entry.value as u16));
            data.extend_from_slice(&[0, 0]);
        } else {
            data.extend_from_slice(&u32_bytes(entry.value));
        }
    }
    data.extend_from_slice(&[0u8; 4]); // next IFD offset
    data
}
