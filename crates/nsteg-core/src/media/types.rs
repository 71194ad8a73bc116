use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use image::io::Reader as ImageReader;
use image::{ImageFormat, RgbaImage};
use log::{debug, error};

use crate::error::NstegError;
use crate::pixel_grid::PixelGrid;
use crate::result::Result;

use super::Persist;

/// a carrier image, decoded to RGBA with 8 bits per channel
#[derive(Debug)]
pub struct Media {
    image: RgbaImage,
    format: ImageFormat,
}

impl Media {
    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            image,
            format: ImageFormat::Png,
        }
    }

    /// Opens a PNG, JPEG or GIF file. The format is guessed from the content
    /// and falls back to the file extension.
    pub fn from_file(f: &Path) -> Result<Self> {
        let reader = ImageReader::open(f)
            .map_err(|source| NstegError::ReadError { source })?
            .with_guessed_format()
            .map_err(|source| NstegError::ReadError { source })?;

        let format = match reader.format() {
            Some(format @ (ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Gif)) => format,
            _ => return Err(NstegError::UnsupportedMedia),
        };

        let image = reader
            .decode()
            .map_err(|e| {
                error!("Error decoding image {f:?}: {e}");
                NstegError::InvalidImageMedia
            })?
            .to_rgba8();
        debug!(
            "opened {format:?} image {f:?} with {}x{} pixels",
            image.width(),
            image.height()
        );

        Ok(Self { image, format })
    }

    /// an encoded grid, to be persisted as PNG
    pub fn from_grid(grid: PixelGrid<u8>) -> Result<Self> {
        Ok(Self::from_image(RgbaImage::try_from(grid)?))
    }

    /// the format the media was read from
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn to_grid(&self) -> PixelGrid<u8> {
        PixelGrid::from(self.image.clone())
    }

    pub fn into_grid(self) -> PixelGrid<u8> {
        PixelGrid::from(self.image)
    }

    /// writes the image as PNG, whatever format it was read from
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        self.image
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                NstegError::ImageEncodingError
            })
    }
}

impl Persist for Media {
    fn save_as(&self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            NstegError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);
        self.save_to_writer(&mut writer)?;

        writer
            .flush()
            .map_err(|source| NstegError::WriteError { source })
    }
}
