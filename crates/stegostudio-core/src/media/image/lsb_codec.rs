use super::decoder::LsbReader;
use super::encoder::LsbWriter;
use crate::media::PixelBuffer;

/// stores one bit in the least significant bit of a color channel
pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

impl HideBit for &mut u8 {
    #[inline]
    fn hide_bit(self, bit: bool) {
        *self = (*self & (u8::MAX - 1)) | u8::from(bit);
    }
}

/// reads the bit from the least significant bit of a color channel
pub trait UnveilBit {
    fn unveil_bit(self) -> bool;
}

impl UnveilBit for &u8 {
    #[inline]
    fn unveil_bit(self) -> bool {
        *self & 1 == 1
    }
}

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB Image Decoder, the cursor sits on the first color channel
    pub fn decoder(input: &PixelBuffer) -> LsbReader<'_> {
        LsbReader::new(input)
    }

    /// builds a LSB Image Encoder, the cursor sits on the first color channel
    pub fn encoder(carrier: &mut PixelBuffer) -> LsbWriter<'_> {
        LsbWriter::new(carrier)
    }
}
