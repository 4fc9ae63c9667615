//! Capacity accounting for LSB carriers.
//!
//! Every pixel contributes one bit per color channel (R, G and B); the alpha
//! channel never carries data. The container header is subtracted, so the
//! capacity is the number of whole payload bytes a carrier can take.

use crate::media::image::COLOR_CHANNELS_PER_PIXEL;
use crate::media::payload::HEADER_BYTES;
use crate::media::PixelBuffer;

/// Number of payload bytes `buffer` can hold, never negative.
pub fn capacity(buffer: &PixelBuffer) -> usize {
    capacity_for_pixels(buffer.pixel_count())
}

/// Number of payload bytes a `width` x `height` carrier can hold.
pub fn capacity_for_dimensions(width: u32, height: u32) -> usize {
    capacity_for_pixels(width as usize * height as usize)
}

fn capacity_for_pixels(pixels: usize) -> usize {
    ((pixels * COLOR_CHANNELS_PER_PIXEL) / 8).saturating_sub(HEADER_BYTES)
}
