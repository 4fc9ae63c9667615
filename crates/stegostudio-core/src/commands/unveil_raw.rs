use std::path::Path;

use crate::StegoError;

/// unveil all raw data, no content format interpretation is happening.
/// Just a raw binary dump of the data gathered by the LSB algorithm.
pub fn unveil_raw(secret_media: &Path, destination_file: &Path) -> Result<(), StegoError> {
    crate::api::unveil_raw::prepare()
        .from_secret_file(secret_media)
        .into_raw_file(destination_file)
        .execute()
}
