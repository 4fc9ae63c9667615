use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use crate::media::PixelBuffer;
use crate::StegoError;

pub fn prepare() -> UnveilRawApi {
    UnveilRawApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilRawApi {
    secret_media: Option<PathBuf>,
    destination_file: Option<PathBuf>,
}

impl UnveilRawApi {
    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the file where the raw data will be dumped to
    pub fn into_raw_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Dumps every whole byte the LSBs carry, no header interpretation is happening
    pub fn execute(self) -> Result<(), StegoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(destination_file) = self.destination_file else {
            return Err(StegoError::TargetNotSet);
        };

        let carrier = PixelBuffer::open(&secret_media)?;
        let raw = crate::unveil_raw(&carrier)?;

        let mut file =
            File::create(&destination_file).map_err(|source| StegoError::WriteError { source })?;
        file.write_all(&raw)
            .map_err(|source| StegoError::WriteError { source })?;
        info!("Dumped {} raw bytes into {destination_file:?}", raw.len());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::Persist;
    use crate::{Message, PayloadType};
    use tempfile::tempdir;

    #[test]
    fn should_dump_header_and_payload() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let secret = temp_dir.path().join("secret.png");
        let raw_file = temp_dir.path().join("raw.bin");
        let mut carrier = PixelBuffer::new(8, 8);
        crate::hide(&mut carrier, &Message::text("Hi")).expect("Failed to hide message");
        carrier.save_as(&secret).expect("Failed to write secret file");

        prepare()
            .from_secret_file(&secret)
            .into_raw_file(&raw_file)
            .execute()
            .expect("Failed to unveil raw data");

        let raw = std::fs::read(raw_file).expect("Failed to read raw file");
        // 8 * 8 pixel * 3 channel / 8 bit
        assert_eq!(raw.len(), 24);
        assert_eq!(raw[0], u8::from(PayloadType::Text));
        assert_eq!(&raw[1..5], &[2, 0, 0, 0]);
        assert_eq!(&raw[5..7], b"Hi");
        assert!(raw[7..].iter().all(|b| *b == 0));
    }

    #[test]
    fn should_report_missing_inputs() {
        assert!(matches!(
            prepare().into_raw_file("raw.bin").execute(),
            Err(StegoError::CarrierNotSet)
        ));
        assert!(matches!(
            prepare().from_secret_file("secret.png").execute(),
            Err(StegoError::TargetNotSet)
        ));
    }
}
