use log::debug;

use crate::bit_stream::BitSink;
use crate::capacity;
use crate::codec_options::CodecOptions;
use crate::embedder::Embedder;
use crate::error::NstegError;
use crate::extractor::Extractor;
use crate::header::LengthHeaderCodec;
use crate::pixel_grid::{Channel, PixelGrid};
use crate::result::Result;

/// The codec facade, the only entry point callers need.
///
/// A `Codec` holds no state besides its options, calls on distinct grids
/// can happen concurrently from many threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct Codec {
    options: CodecOptions,
    header: LengthHeaderCodec,
}

impl Codec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails with [`NstegError::InvalidHeaderWidth`] for unsupported header widths
    pub fn with_options(options: CodecOptions) -> Result<Self> {
        Ok(Self {
            options,
            header: LengthHeaderCodec::new(options.header_width)?,
        })
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Hides `payload` in a copy of `grid` and returns that copy.
    pub fn encode<C: Channel>(&self, grid: &PixelGrid<C>, payload: &[u8]) -> Result<PixelGrid<C>> {
        let length = u32::try_from(payload.len()).map_err(|_| NstegError::PayloadTooLarge {
            length: payload.len() as u64,
            max: self.header.max_length(),
        })?;

        let available = self.capacity(grid);
        if length as u64 > available {
            return Err(NstegError::CapacityExceeded {
                needed: (length as u64 + self.header.size_in_bytes()) * 8,
                available: capacity::usable_bits(grid, &self.options),
            });
        }
        debug!("encoding {length} bytes into a grid with a capacity of {available} bytes");

        let mut bits = BitSink::with_capacity(payload.len() + self.header.size_in_bytes() as usize);
        self.header.write_header(&mut bits, length)?;
        bits.write_bytes(payload)?;

        Embedder::new(self.options).embed(grid, bits.into_bit_stream())
    }

    /// Unveils the payload of `grid`.
    pub fn decode<C: Channel>(&self, grid: &PixelGrid<C>) -> Result<Vec<u8>> {
        self.extractor().extract(grid)
    }

    /// Maximum payload size in bytes `grid` can carry
    pub fn capacity<C: Channel>(&self, grid: &PixelGrid<C>) -> u64 {
        capacity::capacity(grid, &self.options, &self.header)
    }

    /// Size of the payload in bytes that is announced by the header of `grid`,
    /// without unveiling the payload itself.
    pub fn message_size<C: Channel>(&self, grid: &PixelGrid<C>) -> Result<u32> {
        self.extractor().message_size(grid)
    }

    fn extractor(&self) -> Extractor {
        Extractor::new(self.options, self.header)
    }
}
