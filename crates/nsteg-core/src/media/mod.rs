//! The image collaborator: decoding PNG, JPEG and GIF carriers into pixel grids and
//! persisting encoded grids as PNG.

pub mod image;
mod types;

use std::path::Path;

pub use types::*;

pub trait Persist {
    fn save_as(&self, _: &Path) -> crate::Result<()>;
}
