use std::process::ExitCode;

use clap::Parser;
use log::error;
use stegostudio_core::StegoError;

mod cli;
mod commands;

use crate::cli::CliArgs;

pub type CliResult<T> = stegostudio_core::Result<T>;

fn main() -> ExitCode {
    env_logger::init();

    match CliArgs::parse().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(StegoError::NoHiddenPayload) => {
            eprintln!("no hidden message found");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
