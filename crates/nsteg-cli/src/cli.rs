use clap::{Parser, Subcommand};
use nsteg_core::{CodecOptions, LENGTH_HEADER_BITS};

use crate::commands::*;

/// A command-line steganography utility, hiding text files in PNG, JPEG and GIF images
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Experimental: width of the length header in bits (8, 16, 24 or 32)
    #[arg(long = "x-header-width", global = true, default_value_t = LENGTH_HEADER_BITS)]
    pub header_width: u32,

    /// Experimental: also hide data in the alpha channel
    #[arg(long = "x-use-alpha", global = true)]
    pub use_alpha: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions {
            skip_alpha_channel: !self.use_alpha,
            header_width: self.header_width,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Encode(encode::EncodeArgs),
    Decode(decode::DecodeArgs),
    Capacity(capacity::CapacityArgs),
}
