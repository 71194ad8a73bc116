//! Conversions between [`PixelGrid`] and the buffers of the `image` crate.

use image::{DynamicImage, ImageBuffer, Rgb, RgbImage, Rgba, RgbaImage};

use crate::error::NstegError;
use crate::pixel_grid::PixelGrid;

pub type Rgba16Image = ImageBuffer<Rgba<u16>, Vec<u16>>;
pub type Rgb16Image = ImageBuffer<Rgb<u16>, Vec<u16>>;

impl From<RgbaImage> for PixelGrid<u8> {
    fn from(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        PixelGrid::from_raw_parts(width, height, 4, img.into_raw())
    }
}

impl From<RgbImage> for PixelGrid<u8> {
    fn from(img: RgbImage) -> Self {
        let (width, height) = img.dimensions();
        PixelGrid::from_raw_parts(width, height, 3, img.into_raw())
    }
}

impl From<Rgba16Image> for PixelGrid<u16> {
    fn from(img: Rgba16Image) -> Self {
        let (width, height) = img.dimensions();
        PixelGrid::from_raw_parts(width, height, 4, img.into_raw())
    }
}

impl From<Rgb16Image> for PixelGrid<u16> {
    fn from(img: Rgb16Image) -> Self {
        let (width, height) = img.dimensions();
        PixelGrid::from_raw_parts(width, height, 3, img.into_raw())
    }
}

fn layout_error(expected: u8, given: u8) -> NstegError {
    NstegError::InvalidPixelGrid(format!(
        "expected {expected} channels per pixel, got {given}"
    ))
}

impl TryFrom<PixelGrid<u8>> for RgbaImage {
    type Error = NstegError;

    fn try_from(grid: PixelGrid<u8>) -> Result<Self, Self::Error> {
        let (width, height) = grid.dimensions();
        let channels = grid.channels_per_pixel();
        if channels != 4 {
            return Err(layout_error(4, channels));
        }
        ImageBuffer::from_raw(width, height, grid.into_samples())
            .ok_or_else(|| layout_error(4, channels))
    }
}

impl TryFrom<PixelGrid<u8>> for RgbImage {
    type Error = NstegError;

    fn try_from(grid: PixelGrid<u8>) -> Result<Self, Self::Error> {
        let (width, height) = grid.dimensions();
        let channels = grid.channels_per_pixel();
        if channels != 3 {
            return Err(layout_error(3, channels));
        }
        ImageBuffer::from_raw(width, height, grid.into_samples())
            .ok_or_else(|| layout_error(3, channels))
    }
}

impl TryFrom<PixelGrid<u8>> for DynamicImage {
    type Error = NstegError;

    fn try_from(grid: PixelGrid<u8>) -> Result<Self, Self::Error> {
        match grid.channels_per_pixel() {
            3 => Ok(DynamicImage::ImageRgb8(grid.try_into()?)),
            4 => Ok(DynamicImage::ImageRgba8(grid.try_into()?)),
            other => Err(layout_error(4, other)),
        }
    }
}

impl TryFrom<PixelGrid<u16>> for Rgba16Image {
    type Error = NstegError;

    fn try_from(grid: PixelGrid<u16>) -> Result<Self, Self::Error> {
        let (width, height) = grid.dimensions();
        let channels = grid.channels_per_pixel();
        if channels != 4 {
            return Err(layout_error(4, channels));
        }
        ImageBuffer::from_raw(width, height, grid.into_samples())
            .ok_or_else(|| layout_error(4, channels))
    }
}
