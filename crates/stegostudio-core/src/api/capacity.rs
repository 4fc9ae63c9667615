use std::path::Path;

use crate::media::PixelBuffer;
use crate::{CodecOptions, StegoError};

/// Number of payload bytes the image file can take, after downscaling it
/// according to `options` the same way hiding would.
pub fn of_file(image: impl AsRef<Path>, options: &CodecOptions) -> Result<usize, StegoError> {
    let carrier = PixelBuffer::from_file(image, options)?;

    Ok(crate::capacity(&carrier))
}
