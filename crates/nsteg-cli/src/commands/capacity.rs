use std::path::PathBuf;

use clap::Args;
use log::debug;
use nsteg_core::CodecOptions;

use crate::CliResult;

/// Shows how many bytes an image can hide and the size of a message it may already hold
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Image file such as PNG, JPEG or GIF
    #[arg(short = 'i', long = "image", value_name = "image file", required = true)]
    pub image: PathBuf,
}

impl CapacityArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let capacity = nsteg_core::commands::capacity(&self.image, options)?;
        println!("capacity: {capacity} bytes");

        // any image has some header bits, they are only meaningful for encoded images
        match nsteg_core::commands::message_size(&self.image, options) {
            Ok(size) if size as u64 <= capacity => println!("message size: {size} bytes"),
            Ok(size) => debug!("header announces {size} bytes, more than the capacity"),
            Err(e) => debug!("no message size readable: {e}"),
        }

        Ok(())
    }
}
