//! Byte source abstraction and endian-aware read primitives.
//!
//! Every decoder reads through [`ByteSource`], which is any `Read + Seek`.
//! The provided methods never buffer on their own: each call consumes exactly
//! the bytes it names, so decoders can reason about the cursor position with
//! plain offset arithmetic.

use std::io::{self, Read, Seek, SeekFrom};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

pub trait ByteSource: Read + Seek {
    fn read_u8(&mut self) -> io::Result<u8> {
        let mut buf = [0u8; 1];
        self.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    fn read_u16(&mut self, endian: Endian) -> io::Result<u16> {
        let mut buf = [0u8; 2];
        self.read_exact(&mut buf)?;
        Ok(match endian {
            Endian::Little => u16::from_le_bytes(buf),
            Endian::Big => u16::from_be_bytes(buf),
        })
    }

    /// Reads a 3-byte little-endian unsigned integer.
    fn read_u24_le(&mut self) -> io::Result<u32> {
        let mut buf = [0u8; 3];
        self.read_exact(&mut buf)?;
        Ok(u32::from_le_bytes([buf[0], buf[1], buf[2], 0]))
    }

    fn read_u32(&mut self, endian: Endian) -> io::Result<u32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(match endian {
            Endian::Little => u32::from_le_bytes(buf),
            Endian::Big => u32::from_be_bytes(buf),
        })
    }

    fn read_i32_le(&mut self) -> io::Result<i32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(i32::from_le_bytes(buf))
    }

    /// Reads a four-character code such as `WEBP` or `VP8L`.
    fn read_tag(&mut self) -> io::Result<[u8; 4]> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Advances the cursor by `count` bytes.
    ///
    /// Skipping past the end is not an error by itself; the next read fails.
    /// Uses `seek_relative` so a `BufReader` keeps its buffer when the
    /// target is still inside it.
    fn skip(&mut self, count: u64) -> io::Result<()> {
        let delta = i64::try_from(count)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "skip count too large"))?;
        self.seek_relative(delta)
    }

    /// Moves the cursor to an absolute offset from the start of the source.
    fn seek_to(&mut self, offset: u64) -> io::Result<()> {
        self.seek(SeekFrom::Start(offset))?;
        Ok(())
    }
}

impl<T: Read + Seek> ByteSource for T {}
