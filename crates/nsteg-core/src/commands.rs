//! File level operations on top of the codec: reading carriers and text files,
//! naming outputs and persisting results.

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::codec::Codec;
use crate::codec_options::CodecOptions;
use crate::error::NstegError;
use crate::media::{Media, Persist};
use crate::result::Result;

/// marker that every encoded image carries right before its extension
pub const ENCODED_MARKER: &str = "_en";

/// number of leading bytes peeked by [`sanity_check`]
const PEEK_BYTES: usize = 5;

/// Ensures `path` is a regular, non-empty file.
pub fn sanity_check(path: &Path) -> Result<()> {
    let meta = fs::metadata(path).map_err(|source| NstegError::ReadError { source })?;
    if !meta.is_file() {
        return Err(NstegError::NotAFile(path.to_path_buf()));
    }
    if meta.len() == 0 {
        return Err(NstegError::EmptyFile(path.to_path_buf()));
    }

    let mut peek = [0; PEEK_BYTES];
    let n = File::open(path)
        .and_then(|mut f| f.read(&mut peek))
        .map_err(|source| NstegError::ReadError { source })?;
    debug!(
        "{path:?}: {} bytes, starts with {:?}",
        meta.len(),
        String::from_utf8_lossy(&peek[..n])
    );

    Ok(())
}

fn file_stem(path: &Path) -> Result<&str> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| NstegError::NotAFile(path.to_path_buf()))
}

/// `images/photo.jpg` becomes `images/photo_en.png`, encoded images are always PNG
pub fn encoded_image_name(image: &Path) -> Result<PathBuf> {
    let stem = file_stem(image)?;
    Ok(image.with_file_name(format!("{stem}{ENCODED_MARKER}.png")))
}

/// `images/photo_en.png` becomes `<out_dir>/photo_en.txt`
pub fn message_file_name(image: &Path, out_dir: &Path) -> Result<PathBuf> {
    let stem = file_stem(image)?;
    Ok(out_dir.join(format!("{stem}.txt")))
}

pub fn is_encoded_image_name(image: &Path) -> bool {
    file_stem(image)
        .map(|s| s.contains(ENCODED_MARKER))
        .unwrap_or(false)
}

/// Hides the content of `text` in `image` and saves the result as PNG,
/// either to `output` or next to `image` (see [`encoded_image_name`]).
pub fn encode(
    image: &Path,
    text: &Path,
    output: Option<&Path>,
    options: CodecOptions,
) -> Result<PathBuf> {
    sanity_check(image)?;
    sanity_check(text)?;

    let codec = Codec::with_options(options)?;
    let payload = fs::read(text).map_err(|source| NstegError::ReadError { source })?;
    let media = Media::from_file(image)?;
    let grid = media.into_grid();
    info!(
        "{image:?} may hold a message of {} bytes, {} bytes to hide",
        codec.capacity(&grid),
        payload.len()
    );

    let encoded = codec.encode(&grid, &payload)?;

    let target = match output {
        Some(output) => output.to_path_buf(),
        None => encoded_image_name(image)?,
    };
    Media::from_grid(encoded)?.save_as(&target)?;
    info!("encoded image saved as {target:?}");

    Ok(target)
}

/// Unveils the message of an encoded image into `out_dir`, named after the image
/// (see [`message_file_name`]).
pub fn decode(image: &Path, out_dir: &Path, options: CodecOptions) -> Result<PathBuf> {
    if !is_encoded_image_name(image) {
        return Err(NstegError::NotAnEncodedImage(image.to_path_buf()));
    }

    let codec = Codec::with_options(options)?;
    let grid = Media::from_file(image)?.into_grid();
    let message = codec.decode(&grid)?;

    fs::create_dir_all(out_dir).map_err(|source| NstegError::WriteError { source })?;
    let target = message_file_name(image, out_dir)?;
    fs::write(&target, &message).map_err(|source| NstegError::WriteError { source })?;
    info!("{} bytes unveiled into {target:?}", message.len());

    Ok(target)
}

/// capacity in bytes of an image file
pub fn capacity(image: &Path, options: CodecOptions) -> Result<u64> {
    let codec = Codec::with_options(options)?;
    let grid = Media::from_file(image)?.into_grid();

    Ok(codec.capacity(&grid))
}

/// payload size announced by the header of an image file
pub fn message_size(image: &Path, options: CodecOptions) -> Result<u32> {
    let codec = Codec::with_options(options)?;
    let grid = Media::from_file(image)?.into_grid();

    codec.message_size(&grid)
}
