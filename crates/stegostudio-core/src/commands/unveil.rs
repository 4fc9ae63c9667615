use std::path::{Path, PathBuf};

use crate::StegoError;

/// Unveils the payload of `secret_media` into `output_folder`, returns the written file
pub fn unveil(secret_media: &Path, output_folder: &Path) -> Result<PathBuf, StegoError> {
    crate::api::unveil::prepare()
        .from_secret_file(secret_media)
        .into_output_folder(output_folder)
        .execute()
}
