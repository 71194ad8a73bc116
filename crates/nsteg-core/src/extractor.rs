use log::debug;

use crate::bit_stream::{BitSink, ReadBit};
use crate::capacity::eligible_slots;
use crate::codec_options::CodecOptions;
use crate::error::NstegError;
use crate::header::LengthHeaderCodec;
use crate::iterators::EligibleChannels;
use crate::pixel_grid::{Channel, PixelGrid};
use crate::result::Result;

/// Reads the least significant bits of the eligible channels of a grid,
/// in the same order the [`Embedder`](crate::Embedder) writes them.
pub(crate) struct ChannelBits<'a, C> {
    colors: EligibleChannels<'a, C>,
    remaining: u64,
}

impl<'a, C: Channel> ChannelBits<'a, C> {
    pub fn new(grid: &'a PixelGrid<C>, options: &CodecOptions) -> Self {
        let channels = grid.channels_per_pixel();
        let take = options.eligible_channels(channels) as usize;
        Self {
            colors: EligibleChannels::new(grid.samples(), channels as usize, take),
            remaining: eligible_slots(grid, options),
        }
    }
}

impl<C: Channel> ReadBit for ChannelBits<'_, C> {
    fn remaining(&self) -> u64 {
        self.remaining
    }

    fn read_bit(&mut self) -> Result<bool> {
        let color = self.colors.next().ok_or(NstegError::EndOfStream)?;
        self.remaining -= 1;
        Ok(color.unveil_bit())
    }
}

/// Recovers a length framed payload from a grid.
///
/// The embedded length is trusted completely. A grid that was never encoded, or that was
/// lossily processed after encoding, yields garbage instead of an error whenever the
/// garbage length happens to fit into the grid.
#[derive(Debug, Default, Clone, Copy)]
pub struct Extractor {
    options: CodecOptions,
    header: LengthHeaderCodec,
}

impl Extractor {
    pub fn new(options: CodecOptions, header: LengthHeaderCodec) -> Self {
        Self { options, header }
    }

    /// reads only the length header
    pub fn message_size<C: Channel>(&self, grid: &PixelGrid<C>) -> Result<u32> {
        let mut bits = ChannelBits::new(grid, &self.options);
        self.read_header(&mut bits)
    }

    pub fn extract<C: Channel>(&self, grid: &PixelGrid<C>) -> Result<Vec<u8>> {
        let mut bits = ChannelBits::new(grid, &self.options);
        let declared = self.read_header(&mut bits)?;

        let needed = declared as u64 * 8;
        let available = bits.remaining();
        if needed > available {
            return Err(NstegError::TruncatedPayload {
                declared: declared as u64,
                available,
            });
        }
        debug!("extracting {declared} bytes, {available} bits available");

        let mut payload = BitSink::with_capacity(declared as usize);
        for _ in 0..needed {
            payload.write_bit(bits.read_bit()?)?;
        }

        Ok(payload.into_bytes())
    }

    fn read_header<R: ReadBit>(&self, bits: &mut R) -> Result<u32> {
        let available = bits.remaining();
        if available < self.header.width() as u64 {
            return Err(NstegError::TruncatedHeader { available });
        }
        self.header.read_header(bits)
    }
}
