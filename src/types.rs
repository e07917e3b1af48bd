use serde::Serialize;
use std::fmt;

/// Pixel width and height read from an image header.
///
/// Values are carried as `i64` so that a signed BMP field and an unsigned
/// 32-bit PNG or TIFF field both survive without truncation. Decoders do not
/// clamp or validate: a BMP with negative height reports a negative height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Dimension {
    pub width: i64,
    pub height: i64,
}

impl Dimension {
    /// Sentinel returned when no dimensions could be determined.
    pub const EMPTY: Dimension = Dimension {
        width: 0,
        height: 0,
    };

    pub fn new(width: impl Into<i64>, height: impl Into<i64>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Bmp,
    Gif,
    Png,
    Jpeg,
    WebP,
    Tiff,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Bmp => "bmp",
            ImageFormat::Gif => "gif",
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::WebP => "webp",
            ImageFormat::Tiff => "tiff",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ImageFormat::Bmp => "BMP",
            ImageFormat::Gif => "GIF",
            ImageFormat::Png => "PNG",
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::WebP => "WebP",
            ImageFormat::Tiff => "TIFF",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Format matched by the dispatcher together with the decoded dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    pub format: ImageFormat,
    #[serde(flatten)]
    pub dimension: Dimension,
}
