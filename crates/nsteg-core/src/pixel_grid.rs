use std::fmt::Debug;

use crate::error::NstegError;
use crate::result::Result;

/// A color channel sample that is able to carry one hidden bit in its least significant bit
pub trait Channel: Copy + Default + Debug + PartialEq {
    /// bit depth of the sample type
    const BITS: u8;

    /// overwrites the least significant bit, all higher bits stay untouched
    fn hide_bit(&mut self, bit: bool);

    /// the least significant bit
    fn unveil_bit(&self) -> bool;
}

impl Channel for u8 {
    const BITS: u8 = 8;

    #[inline(always)]
    fn hide_bit(&mut self, bit: bool) {
        *self = (*self & (u8::MAX - 1)) | u8::from(bit);
    }

    #[inline(always)]
    fn unveil_bit(&self) -> bool {
        *self & 1 == 1
    }
}

impl Channel for u16 {
    const BITS: u8 = 16;

    #[inline(always)]
    fn hide_bit(&mut self, bit: bool) {
        *self = (*self & (u16::MAX - 1)) | u16::from(bit);
    }

    #[inline(always)]
    fn unveil_bit(&self) -> bool {
        *self & 1 == 1
    }
}

/// A decoded raster image: `width * height` pixels in row-major order,
/// each pixel being `channels_per_pixel` consecutive samples (e.g. R, G, B, A).
///
/// ## Example of usage
/// ```rust
/// use nsteg_core::PixelGrid;
///
/// let grid = PixelGrid::<u8>::from_fn(2, 2, 4, |x, y, pixel| {
///     pixel.copy_from_slice(&[x as u8, y as u8, 0, 255]);
/// })
/// .expect("Cannot build grid");
///
/// assert_eq!(grid.pixel(1, 0), Some(&[1, 0, 0, 255][..]));
/// assert_eq!(grid.bits_per_channel(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid<C: Channel = u8> {
    width: u32,
    height: u32,
    channels: u8,
    samples: Vec<C>,
}

impl<C: Channel> PixelGrid<C> {
    /// builds a grid from raw samples, validating the layout
    pub fn new(width: u32, height: u32, channels_per_pixel: u8, samples: Vec<C>) -> Result<Self> {
        if channels_per_pixel < 3 {
            return Err(NstegError::InvalidPixelGrid(format!(
                "at least 3 channels per pixel are required, got {channels_per_pixel}"
            )));
        }
        let expected = width as u64 * height as u64 * channels_per_pixel as u64;
        if samples.len() as u64 != expected {
            return Err(NstegError::InvalidPixelGrid(format!(
                "{width}x{height} pixels with {channels_per_pixel} channels need {expected} samples, got {}",
                samples.len()
            )));
        }

        Ok(Self::from_raw_parts(width, height, channels_per_pixel, samples))
    }

    /// builds a grid by letting `f` fill every pixel, visited in row-major order
    pub fn from_fn<F>(width: u32, height: u32, channels_per_pixel: u8, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32, &mut [C]),
    {
        let len = width as usize * height as usize * channels_per_pixel as usize;
        let mut samples = vec![C::default(); len];
        if channels_per_pixel > 0 && width > 0 {
            for (i, pixel) in samples
                .chunks_exact_mut(channels_per_pixel as usize)
                .enumerate()
            {
                let x = (i % width as usize) as u32;
                let y = (i / width as usize) as u32;
                f(x, y, pixel);
            }
        }

        Self::new(width, height, channels_per_pixel, samples)
    }

    /// layout must have been checked by the caller
    pub(crate) fn from_raw_parts(width: u32, height: u32, channels: u8, samples: Vec<C>) -> Self {
        Self {
            width,
            height,
            channels,
            samples,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn channels_per_pixel(&self) -> u8 {
        self.channels
    }

    pub fn bits_per_channel(&self) -> u8 {
        C::BITS
    }

    /// true for 4 channel grids, where the 4th channel is alpha
    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// the channels of the pixel at column `x` and row `y`
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[C]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let c = self.channels as usize;
        let start = (y as usize * self.width as usize + x as usize) * c;
        self.samples.get(start..start + c)
    }

    pub fn samples(&self) -> &[C] {
        &self.samples
    }

    pub(crate) fn samples_mut(&mut self) -> &mut [C] {
        &mut self.samples
    }

    pub fn into_samples(self) -> Vec<C> {
        self.samples
    }
}
