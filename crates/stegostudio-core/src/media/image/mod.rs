pub mod decoder;
pub mod encoder;
mod iterators;
pub mod lsb_codec;

pub use iterators::{ALPHA_CHANNEL_INDEX, CHANNELS_PER_PIXEL, COLOR_CHANNELS_PER_PIXEL};
pub use lsb_codec::LsbCodec;
