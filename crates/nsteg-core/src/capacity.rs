//! Capacity of a pixel grid, a pure function of its dimensions and channel layout.

use crate::codec_options::CodecOptions;
use crate::header::LengthHeaderCodec;
use crate::pixel_grid::{Channel, PixelGrid};

/// number of channels that can carry one hidden bit each
pub fn eligible_slots<C: Channel>(grid: &PixelGrid<C>, options: &CodecOptions) -> u64 {
    grid.pixel_count() * options.eligible_channels(grid.channels_per_pixel()) as u64
}

/// eligible slots rounded down to whole bytes, header included
pub fn usable_bits<C: Channel>(grid: &PixelGrid<C>, options: &CodecOptions) -> u64 {
    eligible_slots(grid, options) / 8 * 8
}

/// Maximum payload in bytes, after reserving the length header.
/// Grids too small for the header alone have a capacity of 0.
pub fn capacity<C: Channel>(
    grid: &PixelGrid<C>,
    options: &CodecOptions,
    header: &LengthHeaderCodec,
) -> u64 {
    (eligible_slots(grid, options) / 8).saturating_sub(header.size_in_bytes())
}
