use crate::header::LENGTH_HEADER_BITS;

/// Codec configuration, threaded explicitly through [`Codec::with_options`](crate::Codec::with_options).
///
/// Encoder and decoder have to agree on these options,
/// an image hidden with one set of options cannot be unveiled with another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// If true no alpha channel would be used for encoding,
    /// this reduces then the capacity by one bit per pixel.
    /// It only applies to grids with exactly 4 channels per pixel.
    pub skip_alpha_channel: bool,

    /// Width of the length header in bits, one of 8, 16, 24 or 32.
    ///
    /// Note changing this breaks compatibility with all previously encoded images.
    pub header_width: u32,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            skip_alpha_channel: true,
            header_width: LENGTH_HEADER_BITS,
        }
    }
}

impl CodecOptions {
    /// number of channels per pixel that carry hidden bits
    pub fn eligible_channels(&self, channels_per_pixel: u8) -> u8 {
        if self.skip_alpha_channel && channels_per_pixel == 4 {
            3
        } else {
            channels_per_pixel
        }
    }
}
