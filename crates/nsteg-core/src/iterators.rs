use std::iter::Take;
use std::slice::{ChunksExact, ChunksExactMut, Iter, IterMut};

/// Walks the eligible channels of row-major pixel samples,
/// taking the first `take` channels of every pixel and skipping the rest (e.g. alpha).
pub(crate) struct EligibleChannels<'a, C> {
    pixels: ChunksExact<'a, C>,
    colors: Take<Iter<'a, C>>,
    take: usize,
}

impl<'a, C> EligibleChannels<'a, C> {
    pub fn new(samples: &'a [C], channels_per_pixel: usize, take: usize) -> Self {
        let mut pixels = samples.chunks_exact(channels_per_pixel);
        let colors = pixels.next().unwrap_or_default().iter().take(take);
        Self {
            pixels,
            colors,
            take,
        }
    }
}

impl<'a, C> Iterator for EligibleChannels<'a, C> {
    type Item = &'a C;

    fn next(&mut self) -> Option<Self::Item> {
        self.colors.next().or_else(|| {
            let pixel = self.pixels.next()?;
            self.colors = pixel.iter().take(self.take);
            self.colors.next()
        })
    }
}

/// Mutable counterpart of [`EligibleChannels`]
pub(crate) struct EligibleChannelsMut<'a, C> {
    pixels: ChunksExactMut<'a, C>,
    colors: Take<IterMut<'a, C>>,
    take: usize,
}

impl<'a, C> EligibleChannelsMut<'a, C> {
    pub fn new(samples: &'a mut [C], channels_per_pixel: usize, take: usize) -> Self {
        let mut pixels = samples.chunks_exact_mut(channels_per_pixel);
        let colors = pixels.next().unwrap_or_default().iter_mut().take(take);
        Self {
            pixels,
            colors,
            take,
        }
    }
}

impl<'a, C> Iterator for EligibleChannelsMut<'a, C> {
    type Item = &'a mut C;

    fn next(&mut self) -> Option<Self::Item> {
        self.colors.next().or_else(|| {
            let pixel = self.pixels.next()?;
            self.colors = pixel.iter_mut().take(self.take);
            self.colors.next()
        })
    }
}
