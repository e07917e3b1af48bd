use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::types::ImageFormat;

/// Reasons a header could not be turned into a [`Dimension`](crate::Dimension).
///
/// The public `get_dimensions*` entry points fold every variant into
/// [`Dimension::EMPTY`](crate::Dimension::EMPTY); the variants exist so the
/// failure can still be logged or inspected through [`decode`](crate::decode).
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Unrecognized format: no signature matched the first {examined} bytes")]
    UnrecognizedFormat { examined: usize },

    #[error("Malformed {format} header: {reason}")]
    MalformedHeader {
        format: ImageFormat,
        reason: &'static str,
    },

    #[error("Truncated header: {0}")]
    Truncated(#[from] io::Error),

    #[error("Failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DecodeError {
    pub fn malformed(format: ImageFormat, reason: &'static str) -> Self {
        DecodeError::MalformedHeader { format, reason }
    }

    /// Short label for the failure kind, used in batch reports.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::UnrecognizedFormat { .. } => "unrecognized",
            DecodeError::MalformedHeader { .. } => "malformed",
            DecodeError::Truncated(_) => "truncated",
            DecodeError::Open { .. } => "open",
        }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
