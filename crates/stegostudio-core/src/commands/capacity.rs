use std::path::Path;

use crate::{CodecOptions, StegoError};

pub fn capacity(media: &Path, options: CodecOptions) -> Result<usize, StegoError> {
    crate::api::capacity::of_file(media, &options)
}
