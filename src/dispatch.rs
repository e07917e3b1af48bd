//! Signature lookahead and the public dimension entry points.

use std::fs::File;
use std::io::{self, BufReader, Cursor};
use std::path::Path;

use crate::core::{ByteSource, DecodeError, Result};
use crate::formats::{self, SIGNATURES, Signature};
use crate::types::{Dimension, ImageFormat, ImageInfo};

/// Reads the source one byte at a time, checking the signature table after
/// every byte, and hands the source to the first decoder that matches.
///
/// A shorter signature is tested as soon as enough bytes are buffered, so it
/// wins over any longer signature it is a prefix of. Signatures of equal
/// length resolve by table order.
pub fn decode_with(table: &[Signature], source: &mut dyn ByteSource) -> Result<ImageInfo> {
    let signature = match_signature(table, source)?;
    tracing::trace!(format = %signature.format, magic = ?signature.magic, "signature matched");

    let dimension = (signature.decode)(source)?;
    Ok(ImageInfo {
        format: signature.format,
        dimension,
    })
}

/// Identifies and decodes `source` against the built-in signature table.
pub fn decode(source: &mut dyn ByteSource) -> Result<ImageInfo> {
    decode_with(&SIGNATURES, source)
}

/// Reads only the signature and reports which format it belongs to.
pub fn identify(source: &mut dyn ByteSource) -> Option<ImageFormat> {
    match_signature(&SIGNATURES, source)
        .ok()
        .map(|signature| signature.format)
}

/// Returns the image dimensions, or [`Dimension::EMPTY`] when the format is
/// unknown, the header is malformed, or the source runs short.
pub fn get_dimensions<S: ByteSource>(source: &mut S) -> Dimension {
    settle(decode(source))
}

/// Opens `path` read-only and returns its dimensions. Any failure, including
/// a missing or unreadable file, yields [`Dimension::EMPTY`].
pub fn get_dimensions_from_path(path: impl AsRef<Path>) -> Dimension {
    settle(decode_path(path))
}

pub fn get_dimensions_from_bytes(data: &[u8]) -> Dimension {
    get_dimensions(&mut Cursor::new(data))
}

/// Path form of [`decode`] that keeps the failure reason.
pub fn decode_path(path: impl AsRef<Path>) -> Result<ImageInfo> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DecodeError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&mut BufReader::new(file))
}

fn match_signature(table: &[Signature], source: &mut dyn ByteSource) -> Result<Signature> {
    let lookahead = formats::lookahead(table);
    let mut prefix = Vec::with_capacity(lookahead);

    while prefix.len() < lookahead {
        match source.read_u8() {
            Ok(byte) => prefix.push(byte),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        }

        if let Some(signature) = table.iter().find(|sig| sig.matches(&prefix)) {
            return Ok(*signature);
        }
    }

    Err(DecodeError::UnrecognizedFormat {
        examined: prefix.len(),
    })
}

fn settle(result: Result<ImageInfo>) -> Dimension {
    match result {
        Ok(info) => info.dimension,
        Err(e) => {
            tracing::debug!(kind = e.kind(), "no dimensions: {e}");
            Dimension::EMPTY
        }
    }
}
