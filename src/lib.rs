//! Read image width and height from file headers without decoding pixels.
//!
//! ```
//! use imgdim::{Dimension, get_dimensions_from_bytes};
//!
//! let mut gif = b"GIF89a".to_vec();
//! gif.extend_from_slice(&[0x20, 0x03, 0x58, 0x02]);
//! assert_eq!(get_dimensions_from_bytes(&gif), Dimension::new(800, 600));
//!
//! assert!(get_dimensions_from_bytes(b"not an image").is_empty());
//! ```

pub mod core;
pub mod dispatch;
pub mod formats;
pub mod scan;
pub mod types;

pub use crate::core::{ByteSource, DecodeError, Endian};
pub use dispatch::{
    decode, decode_path, decode_with, get_dimensions, get_dimensions_from_bytes,
    get_dimensions_from_path, identify,
};
pub use formats::{SIGNATURES, Signature};
pub use types::{Dimension, ImageFormat, ImageInfo};
