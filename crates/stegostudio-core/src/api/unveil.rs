use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::media::PixelBuffer;
use crate::{Message, StegoError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_folder: Option<PathBuf>,
}

impl UnveilApi {
    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the folder where the data will be saved to
    pub fn into_output_folder(mut self, output_folder: impl AsRef<Path>) -> Self {
        self.output_folder = Some(output_folder.as_ref().to_path_buf());
        self
    }

    /// Unveils the payload and keeps it in memory, no output folder needed
    pub fn execute_to_memory(self) -> Result<Message, StegoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegoError::CarrierNotSet);
        };

        // the carrier is read as is, any resizing would scramble the bits
        let carrier = PixelBuffer::open(&secret_media)?;
        crate::decode(&carrier)
    }

    /// Execute the unveil process, returns the path of the written file
    pub fn execute(self) -> Result<PathBuf, StegoError> {
        let Some(output_folder) = self.output_folder.clone() else {
            return Err(StegoError::TargetNotSet);
        };

        let message = self.execute_to_memory()?;
        let target_file = output_folder.join(message.file_name());
        let mut file = File::create(&target_file).map_err(|source| {
            error!("Error creating file {target_file:?}: {source}");
            StegoError::WriteError { source }
        })?;
        file.write_all(message.as_bytes())
            .map_err(|source| StegoError::WriteError { source })?;
        info!(
            "Unveiled {} bytes of {} into {target_file:?}",
            message.len(),
            message.payload_type()
        );

        Ok(target_file)
    }
}
