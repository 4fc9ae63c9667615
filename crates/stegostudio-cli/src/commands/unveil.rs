use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Unveils the hidden payload of a PNG image into a folder
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains secret data
    #[arg(short = 'i', long = "in", value_name = "media source file")]
    pub media: PathBuf,

    /// Final data will be stored in that folder
    #[arg(short = 'o', long = "out", value_name = "output folder")]
    pub output_folder: PathBuf,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let written = stegostudio_core::commands::unveil(&self.media, &self.output_folder)?;
        println!("Unveiled into {}", written.display());

        Ok(())
    }
}
