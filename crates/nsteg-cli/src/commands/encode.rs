use std::path::PathBuf;

use clap::Args;
use log::info;
use nsteg_core::CodecOptions;

use crate::CliResult;

/// Hides a text file in a PNG, JPEG or GIF image, the result is always a PNG
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Image file such as PNG, JPEG or GIF, used readonly.
    #[arg(short = 'i', long = "image", value_name = "image file", required = true)]
    pub image: PathBuf,

    /// Text file to hide in the image
    #[arg(short = 't', long = "text", value_name = "text file", required = true)]
    pub text: PathBuf,

    /// Final image will be stored as file, defaults to `<image name>_en.png` next to the image
    #[arg(short = 'o', long = "out", value_name = "output image file")]
    pub write_to_file: Option<PathBuf>,
}

impl EncodeArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let target = nsteg_core::commands::encode(
            &self.image,
            &self.text,
            self.write_to_file.as_deref(),
            options,
        )?;
        info!("hidden {:?} in {:?}", self.text, self.image);
        println!("{}", target.display());

        Ok(())
    }
}
