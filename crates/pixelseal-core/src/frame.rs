//! Length prefixed framing of a payload inside a bit carrier.
//!
//! ```text
//! | bits 0..32            | bits 32..32 + 8 * len |
//! | payload len (u32, BE) | payload, MSB first    |
//! ```
//!
//! Both directions run in two stages, a fixed size header stage followed by
//! the variable size body stage. Each stage checks its own bounds, so a frame
//! is either handled completely or not at all.

use std::io::{ErrorKind, Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::error::PixelSealError;
use crate::result::Result;

/// size of the length prefix in bytes
pub const LENGTH_PREFIX_LEN: usize = 4;
pub const LENGTH_PREFIX_BITS: usize = LENGTH_PREFIX_LEN * 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// byte length of the payload, the prefix itself is not included
    pub payload_len: u32,
}

impl FrameHeader {
    /// `None` when the payload is too long for the 32 bit length prefix
    pub fn for_payload(payload: &[u8]) -> Option<Self> {
        u32::try_from(payload.len())
            .ok()
            .map(|payload_len| Self { payload_len })
    }

    pub fn frame_len(&self) -> usize {
        LENGTH_PREFIX_LEN + self.payload_len as usize
    }

    pub fn frame_bits(&self) -> usize {
        self.frame_len() * 8
    }
}

/// Writes a frame into a carrier of `available_bits` bits
pub struct FrameWriter<W: Write> {
    inner: W,
    available_bits: usize,
}

impl<W: Write> FrameWriter<W> {
    pub fn new(inner: W, available_bits: usize) -> Self {
        Self {
            inner,
            available_bits,
        }
    }

    /// whole bytes the carrier can take, including the length prefix
    pub fn capacity(&self) -> usize {
        self.available_bits / 8
    }

    /// header stage, fails before writing anything if the whole frame would not fit
    pub fn write_header(&mut self, header: FrameHeader) -> Result<()> {
        self.ensure_fits(header.frame_len())?;
        self.inner
            .write_u32::<BigEndian>(header.payload_len)
            .map_err(|e| self.map_write_error(e, header.frame_len()))
    }

    /// body stage, must follow [`FrameWriter::write_header`]
    pub fn write_body(&mut self, payload: &[u8]) -> Result<()> {
        self.inner
            .write_all(payload)
            .map_err(|e| self.map_write_error(e, LENGTH_PREFIX_LEN + payload.len()))?;
        self.inner.flush()?;

        Ok(())
    }

    /// writes header and body and hands back the inner writer
    pub fn write_frame(mut self, payload: &[u8]) -> Result<W> {
        let header = FrameHeader::for_payload(payload).ok_or(PixelSealError::Capacity {
            required: LENGTH_PREFIX_LEN.saturating_add(payload.len()),
            available: self.capacity(),
        })?;
        self.write_header(header)?;
        self.write_body(payload)?;

        Ok(self.inner)
    }

    fn ensure_fits(&self, frame_len: usize) -> Result<()> {
        if frame_len > self.capacity() {
            return Err(PixelSealError::Capacity {
                required: frame_len,
                available: self.capacity(),
            });
        }

        Ok(())
    }

    fn map_write_error(&self, e: std::io::Error, required: usize) -> PixelSealError {
        match e.kind() {
            ErrorKind::WriteZero => PixelSealError::Capacity {
                required,
                available: self.capacity(),
            },
            _ => PixelSealError::IoError(e),
        }
    }
}

/// Reads a frame from a carrier of `available_bits` bits
pub struct FrameReader<R: Read> {
    inner: R,
    available_bits: usize,
}

impl<R: Read> FrameReader<R> {
    pub fn new(inner: R, available_bits: usize) -> Self {
        Self {
            inner,
            available_bits,
        }
    }

    pub fn capacity(&self) -> usize {
        self.available_bits / 8
    }

    /// header stage, reads the 32 bit length prefix
    pub fn read_header(&mut self) -> Result<FrameHeader> {
        if self.available_bits < LENGTH_PREFIX_BITS {
            return Err(self.truncated(LENGTH_PREFIX_BITS));
        }
        let payload_len = self
            .inner
            .read_u32::<BigEndian>()
            .map_err(|e| self.map_read_error(e, LENGTH_PREFIX_BITS))?;

        Ok(FrameHeader { payload_len })
    }

    /// body stage, reads exactly the payload announced by `header`
    pub fn read_body(&mut self, header: FrameHeader) -> Result<Vec<u8>> {
        let declared = header.payload_len as usize;
        if declared > self.capacity() {
            return Err(PixelSealError::InvalidLength {
                declared,
                capacity: self.capacity(),
            });
        }
        if header.frame_bits() > self.available_bits {
            return Err(self.truncated(header.frame_bits()));
        }

        let mut payload = vec![0; declared];
        self.inner
            .read_exact(&mut payload)
            .map_err(|e| self.map_read_error(e, header.frame_bits()))?;

        Ok(payload)
    }

    pub fn read_frame(mut self) -> Result<Vec<u8>> {
        let header = self.read_header()?;
        self.read_body(header)
    }

    fn truncated(&self, required_bits: usize) -> PixelSealError {
        PixelSealError::TruncatedImage {
            required_bits,
            available_bits: self.available_bits,
        }
    }

    fn map_read_error(&self, e: std::io::Error, required_bits: usize) -> PixelSealError {
        match e.kind() {
            ErrorKind::UnexpectedEof => self.truncated(required_bits),
            _ => PixelSealError::IoError(e),
        }
    }
}
