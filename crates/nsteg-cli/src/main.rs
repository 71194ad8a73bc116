use clap::Parser;

use crate::cli::{CliArgs, Commands};

mod cli;
mod commands;

pub type CliResult<T> = nsteg_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.codec_options();

    match args.command {
        Commands::Encode(args) => args.run(options),
        Commands::Decode(args) => args.run(options),
        Commands::Capacity(args) => args.run(options),
    }
}
