use std::path::PathBuf;

use clap::{ArgGroup, Args};
use stegostudio_core::commands::HidePayload;
use stegostudio_core::{CodecOptions, PayloadType};

use crate::CliResult;

/// Hides a text message, an image or an audio file in a PNG image
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("payload").required(true).args(["message", "image", "audio"])))]
pub struct HideArgs {
    /// Carrier image such as PNG or JPEG, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file")]
    pub media: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(short = 'o', long = "out", value_name = "output image file")]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message")]
    pub message: Option<String>,

    /// An image file that will be hidden
    #[arg(long, value_name = "image file")]
    pub image: Option<PathBuf>,

    /// An audio file that will be hidden
    #[arg(long, value_name = "audio file")]
    pub audio: Option<PathBuf>,

    /// Downscale the carrier so that no side exceeds this many pixels
    #[arg(long, value_name = "pixels")]
    pub max_dimension: Option<u32>,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        let payload = match (self.message, &self.image, &self.audio) {
            (Some(message), _, _) => HidePayload::Text(message),
            (None, Some(image), _) => HidePayload::File(PayloadType::Image, image),
            (None, None, Some(audio)) => HidePayload::File(PayloadType::Audio, audio),
            (None, None, None) => return Err(stegostudio_core::StegoError::MissingPayload),
        };

        stegostudio_core::commands::hide(
            &self.media,
            &self.write_to_file,
            payload,
            CodecOptions::default().with_max_dimension(self.max_dimension),
        )?;
        println!("Hidden in {}", self.write_to_file.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn should_hide_a_message_and_unveil_it_again() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.png");
        let secret = temp_dir.path().join("secret.png");
        let plain: RgbaImage = ImageBuffer::from_fn(20, 20, |x, y| Rgba([x as u8, y as u8, 9, 255]));
        plain.save(&carrier).expect("Failed to write carrier");

        HideArgs {
            media: carrier,
            write_to_file: secret.clone(),
            message: Some("Hello CLI".to_string()),
            image: None,
            audio: None,
            max_dimension: None,
        }
        .run()
        .expect("Failed to hide message");

        let unveiled = stegostudio_core::commands::unveil(&secret, temp_dir.path())
            .expect("Failed to unveil message");
        assert_eq!(
            std::fs::read_to_string(unveiled).expect("Failed to read message"),
            "Hello CLI"
        );
    }
}
