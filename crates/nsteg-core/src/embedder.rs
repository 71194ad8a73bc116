use log::debug;

use crate::bit_stream::{BitStream, ReadBit};
use crate::capacity::usable_bits;
use crate::codec_options::CodecOptions;
use crate::error::NstegError;
use crate::iterators::EligibleChannelsMut;
use crate::pixel_grid::{Channel, PixelGrid};
use crate::result::Result;

/// Writes a bit stream into the least significant bits of the eligible channels of a grid,
/// pixels in raster order and channels in their stored order (R, G, B, skipping alpha).
#[derive(Debug, Default, Clone, Copy)]
pub struct Embedder {
    options: CodecOptions,
}

impl Embedder {
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    /// Returns a copy of `grid` that carries all of `bits`, `grid` itself stays untouched.
    /// Fails with [`NstegError::CapacityExceeded`] before touching any pixel.
    pub fn embed<C: Channel>(&self, grid: &PixelGrid<C>, bits: BitStream) -> Result<PixelGrid<C>> {
        let needed = bits.remaining();
        let available = usable_bits(grid, &self.options);
        if needed > available {
            return Err(NstegError::CapacityExceeded { needed, available });
        }

        let mut carrier = grid.clone();
        let channels = carrier.channels_per_pixel();
        let take = self.options.eligible_channels(channels) as usize;
        let mut written = 0u64;
        for (color, bit) in
            EligibleChannelsMut::new(carrier.samples_mut(), channels as usize, take).zip(bits)
        {
            color.hide_bit(bit);
            written += 1;
        }
        debug!("embedded {written} of {available} usable bits");

        Ok(carrier)
    }
}
