use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NstegError {
    /// Represents a payload that does not fit into the eligible channels of a carrier,
    /// detected before any pixel is touched.
    #[error("Capacity exceeded: {needed} bits are needed but the carrier offers only {available} bits")]
    CapacityExceeded { needed: u64, available: u64 },

    /// Represents a carrier that is too small to even hold the length header
    #[error("Truncated header: the carrier offers only {available} bits")]
    TruncatedHeader { available: u64 },

    /// Represents a carrier that declares more payload than it can hold,
    /// usually a foreign, cropped or recompressed image
    #[error("Truncated payload: {declared} bytes declared but only {available} bits left")]
    TruncatedPayload { declared: u64, available: u64 },

    /// Represents a read past the end of a bit stream
    #[error("Bit stream exhausted")]
    EndOfStream,

    /// Represents a pixel grid that violates its layout invariants
    #[error("Invalid pixel grid: {0}")]
    InvalidPixelGrid(String),

    /// Represents a length header width that is not a whole number of bytes in 8..=32
    #[error("Invalid header width of {0} bits, expected one of 8, 16, 24 or 32")]
    InvalidHeaderWidth(u32),

    /// Represents a payload whose length cannot be expressed by the length header
    #[error("Payload of {length} bytes exceeds the header limit of {max} bytes")]
    PayloadTooLarge { length: u64, max: u64 },

    /// Represents an unsupported carrier media. For example, a WAV file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents an input file without any content
    #[error("The file {0:?} is empty")]
    EmptyFile(PathBuf),

    /// Represents an input path that is a directory or otherwise not a regular file
    #[error("The path {0:?} is not a file")]
    NotAFile(PathBuf),

    /// Represents an image that lacks the `_en` marker of an encoded image
    #[error("The image {0:?} must carry \"_en\" before its extension, e.g. \"images/photo_en.png\"")]
    NotAnEncodedImage(PathBuf),

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
