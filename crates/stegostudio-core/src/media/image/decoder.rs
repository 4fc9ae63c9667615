use std::io::{self, Read};

use bitstream_io::{BigEndian, BitWrite, BitWriter};

use crate::error::StegoError;
use crate::media::image::iterators::ColorChannels;
use crate::media::image::lsb_codec::UnveilBit;
use crate::media::PixelBuffer;
use crate::result::Result;

/// Bit-stream reader, the symmetric counterpart of
/// [`LsbWriter`](crate::media::image::encoder::LsbWriter).
///
/// ## Example of usage
/// ```rust
/// use stegostudio_core::media::image::decoder::LsbReader;
/// use stegostudio_core::media::image::encoder::LsbWriter;
/// use stegostudio_core::media::PixelBuffer;
///
/// let mut buffer = PixelBuffer::new(4, 4);
/// LsbWriter::new(&mut buffer)
///     .write_bytes(b"Hi")
///     .expect("Cannot hide 2 bytes");
///
/// let secret = LsbReader::new(&buffer)
///     .read_bytes(2)
///     .expect("Cannot read 2 bytes");
/// assert_eq!(secret, b"Hi");
/// ```
pub struct LsbReader<'a> {
    position: usize,
    channels: ColorChannels<'a>,
}

impl<'a> LsbReader<'a> {
    pub fn new(buffer: &'a PixelBuffer) -> Self {
        Self {
            position: 0,
            channels: ColorChannels::new(buffer.as_raw()),
        }
    }

    /// number of bits read so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// number of bits that can still be read
    pub fn remaining_bits(&self) -> usize {
        self.channels.remaining()
    }

    pub fn read_bit(&mut self) -> Result<bool> {
        self.ensure_available(1)?;

        Ok(self.take())
    }

    /// reads the next `n` bits, fails without consuming anything if less than `n` are left
    pub fn read_bits(&mut self, n: usize) -> Result<Vec<bool>> {
        self.ensure_available(n)?;

        Ok((0..n).map(|_| self.take()).collect())
    }

    /// reads the next `n` bytes, each one assembled most significant bit first
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        self.ensure_available(n << 3)?;

        let mut bits = BitWriter::endian(Vec::with_capacity(n), BigEndian);
        for _ in 0..(n << 3) {
            let bit = self.take();
            bits.write_bit(bit)?;
        }

        Ok(bits.into_writer())
    }

    fn ensure_available(&self, requested_bits: usize) -> Result<()> {
        let available_bits = self.remaining_bits();
        if requested_bits > available_bits {
            return Err(StegoError::OutOfCapacity {
                requested_bits,
                available_bits,
            });
        }

        Ok(())
    }

    fn take(&mut self) -> bool {
        match self.channels.next() {
            Some(channel) => {
                self.position += 1;
                channel.unveil_bit()
            }
            None => false,
        }
    }
}

impl Read for LsbReader<'_> {
    /// reads as many whole bytes as the carrier still holds, `Ok(0)` marks its end
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.remaining_bits() >> 3);
        let bytes = self
            .read_bytes(n)
            .map_err(|e| io::Error::new(io::ErrorKind::UnexpectedEof, e))?;
        buf[..n].copy_from_slice(&bytes);

        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::image::encoder::LsbWriter;

    #[test]
    fn should_assemble_bytes_most_significant_bit_first() {
        // LSBs of R,G,B | R,G,B | R,G: 1,0,1 | 0,0,1 | 1,1 => 0b1010_0111
        let buffer = PixelBuffer::from_raw(
            3,
            1,
            vec![
                0x01, 0x02, 0x03, 0xff, //
                0x04, 0x06, 0x09, 0xff, //
                0x0b, 0x0d, 0x00, 0xff,
            ],
        )
        .expect("Cannot build a 3x1 buffer");

        let bytes = LsbReader::new(&buffer)
            .read_bytes(1)
            .expect("Cannot read one byte");
        assert_eq!(bytes, vec![0b1010_0111]);
    }

    #[test]
    fn should_read_what_was_written_bit_by_bit() {
        let bits = [true, false, false, true, true, false, true];
        let mut buffer = PixelBuffer::new(3, 1);
        LsbWriter::new(&mut buffer)
            .write_bits(&bits)
            .expect("Cannot write 7 bits");

        let given = LsbReader::new(&buffer)
            .read_bits(bits.len())
            .expect("Cannot read 7 bits");
        assert_eq!(given, bits);
    }

    #[test]
    fn should_fail_hard_when_reading_past_the_end() {
        let buffer = PixelBuffer::new(2, 1);
        let mut reader = LsbReader::new(&buffer);

        assert!(reader.read_bits(4).is_ok());
        match reader.read_bytes(1) {
            Err(StegoError::OutOfCapacity {
                requested_bits: 8,
                available_bits: 2,
            }) => (),
            other => panic!("Expected OutOfCapacity, got {other:?}"),
        }
        assert_eq!(reader.position(), 4);
    }

    #[test]
    fn should_read_to_the_end_through_the_io_adapter() {
        let buffer = PixelBuffer::new(4, 4);
        let mut raw = Vec::new();
        LsbReader::new(&buffer)
            .read_to_end(&mut raw)
            .expect("Cannot read all bytes");

        // 16 pixel * 3 channel = 48 bit
        assert_eq!(raw, vec![0; 6]);
    }
}
