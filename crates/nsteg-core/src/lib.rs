//! # nsteg Core API
//!
//! Hides an arbitrary byte payload in the least significant bits of the pixels
//! of an image, and unveils it again. The entry point is [`Codec`][codec]:
//! - [`Codec::encode`][enc] hides a payload in a copy of a [`PixelGrid`][grid]
//! - [`Codec::decode`][dec] unveils the payload of a grid
//! - [`Codec::capacity`][cap] tells how many bytes a grid can carry
//! - [`Codec::message_size`][size] reads only the length header
//!
//! ## In-pixel layout
//!
//! A 32 bit big-endian length header is followed by `length` payload bytes,
//! every byte most significant bit first. Each bit replaces the least significant
//! bit of one eligible channel, pixels visited row by row, left to right,
//! channels in their stored order with alpha skipped.
//!
//! There is no checksum. Unveiling an image that was never encoded, or that was
//! recompressed after encoding, returns garbage instead of an error, unless the
//! garbage length does not fit into the image.
//!
//! # Usage Examples
//!
//! ## Hide and unveil a message in memory
//!
//! ```rust
//! use nsteg_core::{Codec, PixelGrid};
//!
//! let grid = PixelGrid::<u8>::from_fn(10, 10, 4, |x, y, pixel| {
//!     pixel.copy_from_slice(&[x as u8 * 20, y as u8 * 20, 100, 255]);
//! })
//! .expect("Failed to build carrier grid");
//!
//! let codec = Codec::new();
//! assert_eq!(codec.capacity(&grid), 33);
//!
//! let secret = codec.encode(&grid, b"hello").expect("Failed to hide message");
//! assert_eq!(codec.message_size(&secret).unwrap(), 5);
//! assert_eq!(codec.decode(&secret).unwrap(), b"hello");
//! ```
//!
//! ## Hide a text file inside an image file
//!
//! ```rust,no_run
//! use std::path::Path;
//! use nsteg_core::CodecOptions;
//!
//! let encoded = nsteg_core::commands::encode(
//!     Path::new("images/photo.jpg"),
//!     Path::new("secret.txt"),
//!     None,
//!     CodecOptions::default(),
//! )
//! .expect("Failed to hide text file in image");
//! assert_eq!(encoded, Path::new("images/photo_en.png"));
//! ```
//!
//! [codec]: ./struct.Codec.html
//! [enc]: ./struct.Codec.html#method.encode
//! [dec]: ./struct.Codec.html#method.decode
//! [cap]: ./struct.Codec.html#method.capacity
//! [size]: ./struct.Codec.html#method.message_size
//! [grid]: ./struct.PixelGrid.html

#![warn(clippy::redundant_else)]

pub mod bit_stream;
pub mod capacity;
pub mod codec;
pub mod codec_options;
pub mod commands;
pub mod embedder;
pub mod error;
pub mod extractor;
pub mod header;
mod iterators;
pub mod media;
pub mod pixel_grid;
pub mod result;

pub use crate::bit_stream::{BitSink, BitStream, ReadBit};
pub use crate::codec::Codec;
pub use crate::codec_options::CodecOptions;
pub use crate::embedder::Embedder;
pub use crate::error::NstegError;
pub use crate::extractor::Extractor;
pub use crate::header::{LengthHeaderCodec, LENGTH_HEADER_BITS};
pub use crate::pixel_grid::{Channel, PixelGrid};
pub use crate::result::Result;

/// Hides `payload` in a copy of `grid` with the default options
pub fn encode<C: Channel>(grid: &PixelGrid<C>, payload: &[u8]) -> Result<PixelGrid<C>> {
    Codec::new().encode(grid, payload)
}

/// Unveils the payload of `grid` with the default options
pub fn decode<C: Channel>(grid: &PixelGrid<C>) -> Result<Vec<u8>> {
    Codec::new().decode(grid)
}

/// Capacity of `grid` in bytes with the default options
pub fn capacity<C: Channel>(grid: &PixelGrid<C>) -> u64 {
    Codec::new().capacity(grid)
}

/// Announced payload size of `grid` with the default options
pub fn message_size<C: Channel>(grid: &PixelGrid<C>) -> Result<u32> {
    Codec::new().message_size(grid)
}
