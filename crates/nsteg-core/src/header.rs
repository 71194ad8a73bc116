use crate::bit_stream::{BitSink, ReadBit};
use crate::error::NstegError;
use crate::result::Result;

/// Default width of the length header: a big-endian `u32` counting payload bytes
pub const LENGTH_HEADER_BITS: u32 = 32;

/// Frames a payload with a fixed width length prefix, so that the decoder knows
/// how many payload bits follow without any out-of-band metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthHeaderCodec {
    width: u32,
}

impl Default for LengthHeaderCodec {
    fn default() -> Self {
        Self {
            width: LENGTH_HEADER_BITS,
        }
    }
}

impl LengthHeaderCodec {
    /// `width` in bits, one of 8, 16, 24 or 32
    pub fn new(width: u32) -> Result<Self> {
        match width {
            8 | 16 | 24 | 32 => Ok(Self { width }),
            _ => Err(NstegError::InvalidHeaderWidth(width)),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn size_in_bytes(&self) -> u64 {
        (self.width / 8) as u64
    }

    /// the largest payload length the header can express
    pub fn max_length(&self) -> u64 {
        (1u64 << self.width) - 1
    }

    /// appends exactly `width` bits of `length`, most significant bit first
    pub fn write_header(&self, sink: &mut BitSink, length: u32) -> Result<()> {
        if length as u64 > self.max_length() {
            return Err(NstegError::PayloadTooLarge {
                length: length as u64,
                max: self.max_length(),
            });
        }
        sink.write_bits(self.width, length)
    }

    /// consumes exactly `width` bits and rebuilds the length
    pub fn read_header<R: ReadBit + ?Sized>(&self, source: &mut R) -> Result<u32> {
        source.read_bits(self.width)
    }
}
