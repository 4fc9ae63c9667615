use std::io::{self, Write};

use crate::bit_iterator::BitIterator;
use crate::error::StegoError;
use crate::media::image::iterators::ColorChannelsMut;
use crate::media::image::lsb_codec::HideBit;
use crate::media::PixelBuffer;
use crate::result::Result;

/// Bit-stream writer that stores bits in the least significant bit of the
/// color channels of a [`PixelBuffer`], skipping every alpha channel.
///
/// The cursor starts at the first red channel of the top left pixel and moves
/// in raster order. A write never runs over the end of the carrier: before any
/// channel is touched the writer checks that all requested bits fit.
///
/// ## Example of usage
/// ```rust
/// use stegostudio_core::media::image::encoder::LsbWriter;
/// use stegostudio_core::media::PixelBuffer;
///
/// let mut buffer = PixelBuffer::new(2, 2);
/// let mut writer = LsbWriter::new(&mut buffer);
/// writer.write_bytes(b"A").expect("Cannot hide one byte");
/// assert_eq!(writer.position(), 8);
/// ```
pub struct LsbWriter<'a> {
    position: usize,
    channels: ColorChannelsMut<'a>,
}

impl<'a> LsbWriter<'a> {
    /// constructor for a given `PixelBuffer` that lives somewhere, the cursor sits on the first color channel
    pub fn new(buffer: &'a mut PixelBuffer) -> Self {
        Self {
            position: 0,
            channels: ColorChannelsMut::new(buffer.as_mut_raw()),
        }
    }

    /// number of bits written so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// number of bits that can still be written
    pub fn remaining_bits(&self) -> usize {
        self.channels.remaining()
    }

    /// writes one bit into the next color channel
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.ensure_room_for(1)?;
        self.put(bit);

        Ok(())
    }

    /// writes all bits in order, either all of them fit or none is written
    pub fn write_bits(&mut self, bits: &[bool]) -> Result<()> {
        self.ensure_room_for(bits.len())?;
        for bit in bits {
            self.put(*bit);
        }

        Ok(())
    }

    /// writes all bytes most significant bit first, either all of them fit or none is written
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.ensure_room_for(bytes.len() << 3)?;
        for bit in BitIterator::new(bytes) {
            self.put(bit == 1);
        }

        Ok(())
    }

    fn ensure_room_for(&self, requested_bits: usize) -> Result<()> {
        let available_bits = self.remaining_bits();
        if requested_bits > available_bits {
            return Err(StegoError::OutOfCapacity {
                requested_bits,
                available_bits,
            });
        }

        Ok(())
    }

    fn put(&mut self, bit: bool) {
        if let Some(channel) = self.channels.next() {
            channel.hide_bit(bit);
            self.position += 1;
        }
    }
}

impl Write for LsbWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let bytes_left = self.remaining_bits() >> 3;
        let n = buf.len().min(bytes_left);
        if n == 0 && !buf.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                "carrier has no room left for another byte",
            ));
        }
        self.write_bytes(&buf[..n])
            .map_err(|e| io::Error::new(io::ErrorKind::WriteZero, e))?;

        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
