use std::path::PathBuf;

use clap::Args;
use stegostudio_core::CodecOptions;

use crate::CliResult;

/// Prints how many payload bytes an image can carry
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Carrier image
    #[arg(short = 'i', long = "in", value_name = "media file")]
    pub media: PathBuf,

    /// Downscale the carrier first, as hide would
    #[arg(long, value_name = "pixels")]
    pub max_dimension: Option<u32>,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        let bytes = stegostudio_core::commands::capacity(
            &self.media,
            CodecOptions::default().with_max_dimension(self.max_dimension),
        )?;
        println!("{bytes}");

        Ok(())
    }
}
