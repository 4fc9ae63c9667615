use std::path::{Path, PathBuf};

use log::info;

use crate::media::{Persist, PixelBuffer};
use crate::{CodecOptions, Message, PayloadType, StegoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

/// What to hide, either already in memory or still on disk.
#[derive(Debug)]
enum PayloadSource {
    Message(Message),
    Bytes(PayloadType, Vec<u8>),
    File(PayloadType, PathBuf),
}

#[derive(Default, Debug)]
pub struct HideApi {
    payload: Option<PayloadSource>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Hide a text message, replaces any payload set before
    pub fn with_message(mut self, message: &str) -> Self {
        self.payload = Some(PayloadSource::Message(Message::text(message)));
        self
    }

    /// Hide a text message if one is given, `None` keeps the payload as it is
    pub fn use_message<S: AsRef<str>>(self, message: Option<S>) -> Self {
        match message {
            Some(message) => self.with_message(message.as_ref()),
            None => self,
        }
    }

    /// Hide the content of an image file, replaces any payload set before
    pub fn with_image_payload<A: AsRef<Path>>(self, image_file: A) -> Self {
        self.with_payload_file(PayloadType::Image, image_file)
    }

    /// Hide the content of an audio file, replaces any payload set before
    pub fn with_audio_payload<A: AsRef<Path>>(self, audio_file: A) -> Self {
        self.with_payload_file(PayloadType::Audio, audio_file)
    }

    pub fn with_payload_file<A: AsRef<Path>>(mut self, payload_type: PayloadType, file: A) -> Self {
        self.payload = Some(PayloadSource::File(
            payload_type,
            file.as_ref().to_path_buf(),
        ));
        self
    }

    /// Hide in-memory bytes tagged as `payload_type`, replaces any payload set before.
    /// Text is checked to be UTF-8 on `execute`.
    pub fn with_payload(mut self, payload_type: PayloadType, payload: Vec<u8>) -> Self {
        self.payload = Some(PayloadSource::Bytes(payload_type, payload));
        self
    }

    /// The carrier image, it is only read
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The final carrier is stored there, as PNG
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<(), StegoError> {
        let Some(payload) = self.payload else {
            return Err(StegoError::MissingPayload);
        };
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegoError::TargetNotSet);
        };
        if !is_png_extension(&output) {
            return Err(StegoError::UnsupportedMedia);
        }

        let message = match payload {
            PayloadSource::Message(message) => message,
            PayloadSource::Bytes(payload_type, bytes) => Message::from_raw_data(payload_type, bytes)?,
            PayloadSource::File(payload_type, file) => Message::from_file(payload_type, &file)?,
        };

        let mut carrier = PixelBuffer::from_file(&image, &self.options)?;
        crate::hide(&mut carrier, &message)?;
        carrier.save_as(&output)?;
        info!(
            "Hid {} bytes of {} in {output:?}",
            message.len(),
            message.payload_type()
        );

        Ok(())
    }
}

/// lossy formats would destroy the hidden bits, only PNG is written
fn is_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("png"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_noisy_image;
    use tempfile::{tempdir, TempDir};

    fn prepare_carrier_file(temp_dir: &TempDir) -> PathBuf {
        let carrier = temp_dir.path().join("carrier.png");
        PixelBuffer::from(prepare_noisy_image(32, 32))
            .save_as(&carrier)
            .expect("Failed to write carrier image");

        carrier
    }

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let output = temp_dir.path().join("image-with-secret.png");

        prepare()
            .with_message("Hello, World!")
            .with_image(prepare_carrier_file(&temp_dir))
            .with_output(&output)
            .execute()
            .expect("Failed to hide message in image");

        let carrier = PixelBuffer::open(&output).expect("Failed to open output image");
        assert_eq!(
            crate::decode(&carrier).expect("Failed to decode"),
            Message::text("Hello, World!")
        );
    }

    #[test]
    fn should_hide_the_content_of_a_file() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let secret = temp_dir.path().join("beep.wav");
        std::fs::write(&secret, b"RIFF\x24\0\0\0WAVE").expect("Failed to write secret");
        let output = temp_dir.path().join("out.PNG");

        prepare()
            .with_audio_payload(&secret)
            .with_image(prepare_carrier_file(&temp_dir))
            .with_output(&output)
            .execute()
            .expect("Failed to hide audio in image");

        let carrier = PixelBuffer::open(&output).expect("Failed to open output image");
        assert_eq!(
            crate::decode(&carrier).expect("Failed to decode"),
            Message::Audio(b"RIFF\x24\0\0\0WAVE".to_vec())
        );
    }

    #[test]
    fn should_hide_in_memory_bytes() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let output = temp_dir.path().join("out.png");

        prepare()
            .with_payload(PayloadType::Image, vec![0x89, 0x50, 0x4E, 0x47])
            .with_image(prepare_carrier_file(&temp_dir))
            .with_output(&output)
            .execute()
            .expect("Failed to hide bytes in image");

        let carrier = PixelBuffer::open(&output).expect("Failed to open output image");
        assert_eq!(
            crate::decode(&carrier).expect("Failed to decode"),
            Message::Image(vec![0x89, 0x50, 0x4E, 0x47])
        );
    }

    #[test]
    fn should_refuse_text_that_is_not_utf8() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");

        let result = prepare()
            .with_payload(PayloadType::Text, vec![0xff, 0xfe])
            .with_image(prepare_carrier_file(&temp_dir))
            .with_output(temp_dir.path().join("out.png"))
            .execute();
        assert!(matches!(result, Err(StegoError::MalformedPayload(_))));
    }

    #[test]
    fn should_refuse_lossy_output_formats() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");

        let result = prepare()
            .with_message("Hello")
            .with_image(prepare_carrier_file(&temp_dir))
            .with_output(temp_dir.path().join("out.jpg"))
            .execute();
        assert!(matches!(result, Err(StegoError::UnsupportedMedia)));
    }

    #[test]
    fn should_report_missing_inputs() {
        assert!(matches!(
            prepare().with_image("a.png").with_output("b.png").execute(),
            Err(StegoError::MissingPayload)
        ));
        assert!(matches!(
            prepare().with_message("Hi").with_output("b.png").execute(),
            Err(StegoError::CarrierNotSet)
        ));
        assert!(matches!(
            prepare().with_message("Hi").with_image("a.png").execute(),
            Err(StegoError::TargetNotSet)
        ));
    }

    #[test]
    fn should_not_write_anything_when_the_payload_does_not_fit() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let output = temp_dir.path().join("out.png");

        let result = prepare()
            .with_message(&"x".repeat(380))
            .with_image(prepare_carrier_file(&temp_dir))
            .with_output(&output)
            .execute();

        assert!(matches!(
            result,
            Err(StegoError::PayloadTooLarge {
                payload_len: 380,
                capacity: 379
            })
        ));
        assert!(!output.exists());
    }

    #[test]
    fn should_downscale_the_carrier_before_hiding() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let output = temp_dir.path().join("out.png");

        prepare()
            .with_message("tiny")
            .with_image(prepare_carrier_file(&temp_dir))
            .with_output(&output)
            .with_options(CodecOptions::default().with_max_dimension(Some(16)))
            .execute()
            .expect("Failed to hide message in image");

        let carrier = PixelBuffer::open(&output).expect("Failed to open output image");
        assert_eq!(carrier.dimensions(), (16, 16));
        assert_eq!(
            crate::decode(&carrier).expect("Failed to decode"),
            Message::text("tiny")
        );
    }
}
