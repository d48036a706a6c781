use std::process::ExitCode;

use clap::Parser;
use log::error;

use crate::cli::{CliArgs, Commands};

mod cli;
mod commands;

pub type CliResult<T> = pixelseal_core::Result<T>;

fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();
    let result = match args.command {
        Commands::Hide(args) => args.run(),
        Commands::Unveil(args) => args.run(),
        Commands::UnveilRaw(args) => args.run(),
        Commands::Capacity(args) => args.run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
