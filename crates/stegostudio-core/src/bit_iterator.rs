use std::io::{ErrorKind, Read};
use std::slice;

/// Yields the bits of a byte source one by one, most significant bit first.
///
/// Each item is either `0` or `1`.
pub struct BitIterator<I> {
    i: u32,
    iter: I,
    byte: Option<u8>,
}

impl<I> BitIterator<I> {
    pub fn new(s: I) -> Self {
        BitIterator {
            i: 0,
            iter: s,
            byte: None,
        }
    }
}

impl<I> Iterator for BitIterator<I>
where
    I: Read,
{
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let bit = self.i % 8;
        if bit == 0 {
            self.byte = None;
            let mut b = 0;
            loop {
                match self.iter.read(slice::from_mut(&mut b)) {
                    Ok(0) => return None,
                    Ok(..) => {
                        self.byte = Some(b);
                        break;
                    }
                    Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(_) => return None,
                }
            }
        }
        self.i += 1;

        self.byte.map(|b| (b >> (7 - bit)) & 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_yield_nothing_for_an_empty_source() {
        let b: [u8; 0] = [];
        let mut it = BitIterator::new(&b[..]);

        assert_eq!(it.next(), None);
    }

    #[test]
    fn should_yield_exactly_8_bits_per_byte() {
        let b = [0xff, 0x00, 0xa5];

        assert_eq!(BitIterator::new(&b[..]).count(), 24);
    }
}
