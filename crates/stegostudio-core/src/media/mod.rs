pub mod codec_options;
pub mod image;
pub mod payload;
mod pixel_buffer;

use std::path::Path;

pub use codec_options::CodecOptions;
pub use pixel_buffer::PixelBuffer;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}
