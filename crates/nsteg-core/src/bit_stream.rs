use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::error::NstegError;
use crate::result::Result;

/// Sequential source of single bits
pub trait ReadBit {
    /// number of bits that can still be read
    fn remaining(&self) -> u64;

    /// the next bit, or [`NstegError::EndOfStream`] when nothing is left
    fn read_bit(&mut self) -> Result<bool>;

    /// reads `bits` bits (at most 32) most significant bit first
    fn read_bits(&mut self, bits: u32) -> Result<u32> {
        debug_assert!(bits <= 32);
        let mut value = 0u32;
        for _ in 0..bits {
            value = (value << 1) | u32::from(self.read_bit()?);
        }
        Ok(value)
    }
}

/// A read cursor over the bits of a byte buffer, most significant bit of every byte first.
///
/// The cursor only ever moves forward.
///
/// ## Example of usage
/// ```rust
/// use nsteg_core::{BitStream, ReadBit};
///
/// let mut bits = BitStream::new(vec![0b1000_0001]);
/// assert_eq!(bits.remaining(), 8);
/// assert!(bits.read_bit().unwrap());
/// assert_eq!(bits.read_bits(7).unwrap(), 1);
/// assert!(bits.read_bit().is_err());
/// ```
pub struct BitStream {
    reader: BitReader<Cursor<Vec<u8>>, BigEndian>,
    len_bits: u64,
    position: u64,
}

impl BitStream {
    pub fn new(bytes: Vec<u8>) -> Self {
        let len_bits = bytes.len() as u64 * 8;
        Self {
            reader: BitReader::endian(Cursor::new(bytes), BigEndian),
            len_bits,
            position: 0,
        }
    }

    pub fn len_bits(&self) -> u64 {
        self.len_bits
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.len_bits
    }
}

impl From<Vec<u8>> for BitStream {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for BitStream {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}

impl ReadBit for BitStream {
    fn remaining(&self) -> u64 {
        self.len_bits - self.position
    }

    fn read_bit(&mut self) -> Result<bool> {
        if self.is_exhausted() {
            return Err(NstegError::EndOfStream);
        }
        let bit = self
            .reader
            .read_bit()
            .map_err(|_| NstegError::EndOfStream)?;
        self.position += 1;

        Ok(bit)
    }
}

impl Iterator for BitStream {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_bit().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}

/// Collects single bits and reassembles them into bytes, most significant bit first
pub struct BitSink {
    writer: BitWriter<Vec<u8>, BigEndian>,
    bits_written: u64,
}

impl Default for BitSink {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl BitSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// `bytes` is only a hint for the expected final size
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            writer: BitWriter::endian(Vec::with_capacity(bytes), BigEndian),
            bits_written: 0,
        }
    }

    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.writer.write_bit(bit)?;
        self.bits_written += 1;
        Ok(())
    }

    /// writes the lowest `bits` bits of `value`, most significant bit first
    pub fn write_bits(&mut self, bits: u32, value: u32) -> Result<()> {
        self.writer.write(bits, value)?;
        self.bits_written += bits as u64;
        Ok(())
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_bytes(bytes)?;
        self.bits_written += bytes.len() as u64 * 8;
        Ok(())
    }

    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    /// all complete bytes, a trailing partial byte is dropped
    pub fn into_bytes(self) -> Vec<u8> {
        self.writer.into_writer()
    }

    /// turns the collected bits into a stream for reading them back
    pub fn into_bit_stream(self) -> BitStream {
        BitStream::new(self.into_bytes())
    }
}
