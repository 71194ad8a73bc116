use std::path::PathBuf;

use clap::Args;
use nsteg_core::CodecOptions;

use crate::CliResult;

/// Unveils the text hidden in an encoded image
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Encoded image, its name must contain `_en` before the extension
    #[arg(short = 'i', long = "image", value_name = "image file", required = true)]
    pub image: PathBuf,

    /// Unveiled text will be stored in that folder
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output folder",
        default_value = "messages"
    )]
    pub output_folder: PathBuf,
}

impl DecodeArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let target = nsteg_core::commands::decode(&self.image, &self.output_folder, options)?;
        println!("{}", target.display());

        Ok(())
    }
}
