use std::fmt;

use byteorder::{ByteOrder, LittleEndian};
use thiserror::Error;

/// Size of the container header in bytes: 1 byte type code, 4 bytes length.
pub const HEADER_BYTES: usize = 5;

/// Size of the container header in bits.
pub const HEADER_BITS: usize = HEADER_BYTES * 8;

pub(super) const TYPE_TEXT: u8 = 0;
pub(super) const TYPE_IMAGE: u8 = 1;
pub(super) const TYPE_AUDIO: u8 = 2;

/// What the hidden bytes are, as tagged by the first header byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadType {
    /// UTF-8 text
    Text,
    /// raw bytes of an image file
    Image,
    /// raw bytes of an audio file
    Audio,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Unknown payload type code {0}")]
pub struct UnknownPayloadType(pub u8);

impl From<PayloadType> for u8 {
    fn from(value: PayloadType) -> Self {
        match value {
            PayloadType::Text => TYPE_TEXT,
            PayloadType::Image => TYPE_IMAGE,
            PayloadType::Audio => TYPE_AUDIO,
        }
    }
}

impl TryFrom<u8> for PayloadType {
    type Error = UnknownPayloadType;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            TYPE_TEXT => Ok(PayloadType::Text),
            TYPE_IMAGE => Ok(PayloadType::Image),
            TYPE_AUDIO => Ok(PayloadType::Audio),
            other => Err(UnknownPayloadType(other)),
        }
    }
}

impl fmt::Display for PayloadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadType::Text => write!(f, "text"),
            PayloadType::Image => write!(f, "image"),
            PayloadType::Audio => write!(f, "audio"),
        }
    }
}

/// The fixed size prefix in front of every hidden payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    pub payload_type: PayloadType,
    /// payload length in bytes, the header itself is not included
    pub length: u32,
}

impl ContainerHeader {
    pub fn new(payload_type: PayloadType, length: u32) -> Self {
        Self {
            payload_type,
            length,
        }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_BYTES] {
        encode_header(self.payload_type.into(), self.length)
    }

    /// parses a header, an unknown type code is reported and never coerced
    pub fn from_bytes(bytes: &[u8; HEADER_BYTES]) -> Result<Self, UnknownPayloadType> {
        let (type_code, length) = decode_header(bytes);

        Ok(Self::new(PayloadType::try_from(type_code)?, length))
    }
}

/// `type_code` as single byte followed by `length` as 4 little endian bytes
pub fn encode_header(type_code: u8, length: u32) -> [u8; HEADER_BYTES] {
    let mut header = [type_code, 0, 0, 0, 0];
    LittleEndian::write_u32(&mut header[1..], length);

    header
}

/// exact inverse of [`encode_header`], the type code is handed out raw
pub fn decode_header(bytes: &[u8; HEADER_BYTES]) -> (u8, u32) {
    (bytes[0], LittleEndian::read_u32(&bytes[1..]))
}
