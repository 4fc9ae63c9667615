use clap::{Parser, Subcommand};

use crate::commands::*;
use crate::CliResult;

/// Hides text, images and audio in the least significant bits of PNG images
#[derive(Parser, Debug)]
#[command(name = "stegostudio", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    UnveilRaw(unveil_raw::UnveilRawArgs),
    Capacity(capacity::CapacityArgs),
}

impl CliArgs {
    pub fn run(self) -> CliResult<()> {
        match self.command {
            Commands::Hide(args) => args.run(),
            Commands::Unveil(args) => args.run(),
            Commands::UnveilRaw(args) => args.run(),
            Commands::Capacity(args) => args.run(),
        }
    }
}
