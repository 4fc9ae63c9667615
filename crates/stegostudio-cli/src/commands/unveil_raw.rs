use std::path::PathBuf;

use clap::Args;

/// Dumps all raw LSB data of a PNG image, without reading the header
#[derive(Args, Debug)]
pub struct UnveilRawArgs {
    /// Source image that contains secret data
    #[arg(short = 'i', long = "in", value_name = "media source file")]
    pub media: PathBuf,

    /// Raw data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: PathBuf,
}

impl UnveilRawArgs {
    pub fn run(self) -> crate::CliResult<()> {
        stegostudio_core::commands::unveil_raw(&self.media, &self.output_file)
    }
}
