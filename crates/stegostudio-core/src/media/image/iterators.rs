use std::iter::Enumerate;
use std::slice::{Iter, IterMut};

/// Number of channels of one RGBA pixel.
pub const CHANNELS_PER_PIXEL: usize = 4;

/// Index of the alpha channel inside of one RGBA pixel.
pub const ALPHA_CHANNEL_INDEX: usize = 3;

/// Number of channels per pixel that carry hidden bits (R, G and B).
pub const COLOR_CHANNELS_PER_PIXEL: usize = 3;

#[inline]
fn is_color_channel(index: usize) -> bool {
    index % CHANNELS_PER_PIXEL != ALPHA_CHANNEL_INDEX
}

/// Mutable access to the R, G and B bytes of a row-major RGBA buffer, alpha bytes are skipped.
pub(crate) struct ColorChannelsMut<'a> {
    channels: Enumerate<IterMut<'a, u8>>,
    remaining: usize,
}

impl<'a> ColorChannelsMut<'a> {
    pub fn new(rgba: &'a mut [u8]) -> Self {
        Self {
            remaining: color_channel_count(rgba.len()),
            channels: rgba.iter_mut().enumerate(),
        }
    }

    /// number of color channels not yet visited
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<'a> Iterator for ColorChannelsMut<'a> {
    type Item = &'a mut u8;

    fn next(&mut self) -> Option<Self::Item> {
        let (_, c) = self.channels.find(|(i, _)| is_color_channel(*i))?;
        self.remaining -= 1;
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Readonly access to the R, G and B bytes of a row-major RGBA buffer, alpha bytes are skipped.
pub(crate) struct ColorChannels<'a> {
    channels: Enumerate<Iter<'a, u8>>,
    remaining: usize,
}

impl<'a> ColorChannels<'a> {
    pub fn new(rgba: &'a [u8]) -> Self {
        Self {
            remaining: color_channel_count(rgba.len()),
            channels: rgba.iter().enumerate(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<'a> Iterator for ColorChannels<'a> {
    type Item = &'a u8;

    fn next(&mut self) -> Option<Self::Item> {
        let (_, c) = self.channels.find(|(i, _)| is_color_channel(*i))?;
        self.remaining -= 1;
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// counts the color channel bytes of a buffer with `len` bytes, a trailing partial pixel counts as well
fn color_channel_count(len: usize) -> usize {
    (0..len % CHANNELS_PER_PIXEL)
        .filter(|i| is_color_channel(*i))
        .count()
        + (len / CHANNELS_PER_PIXEL) * COLOR_CHANNELS_PER_PIXEL
}
