pub mod error;
pub mod io;

pub use error::{DecodeError, Result};
pub use io::{ByteSource, Endian};
