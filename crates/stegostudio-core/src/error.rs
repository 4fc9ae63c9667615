use std::string::FromUtf8Error;
use thiserror::Error;

pub use crate::media::payload::UnknownPayloadType;

#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents a carrier that could not be decoded, for example a broken PNG file
    #[error("Image could not be loaded: {0}")]
    ImageLoadError(#[source] image::ImageError),

    /// Represents a carrier file format that is not supported, for example a movie file
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents a raw RGBA buffer whose length does not match `width * height * 4`
    #[error("Pixel buffer of {width}x{height} needs {expected} bytes but {given} were given")]
    InvalidBufferLength {
        width: u32,
        height: u32,
        expected: usize,
        given: usize,
    },

    /// Represents a payload that does not fit into the carrier, checked before anything is written
    #[error("Payload of {payload_len} bytes exceeds the carrier capacity of {capacity} bytes")]
    PayloadTooLarge { payload_len: usize, capacity: usize },

    /// Represents an empty payload, a length of 0 is never a valid container
    #[error("Payload is empty, there is nothing to hide")]
    EmptyPayload,

    /// Represents a bit cursor that ran over the end of the carrier
    #[error("Out of capacity: {requested_bits} bits requested but only {available_bits} bits left")]
    OutOfCapacity {
        requested_bits: usize,
        available_bits: usize,
    },

    /// Represents an unveil of no secret data, the normal outcome for an image that carries nothing
    #[error("No hidden payload found")]
    NoHiddenPayload,

    /// Represents a valid header whose payload does not decode as its type claims
    #[error("Hidden payload is malformed")]
    MalformedPayload(#[from] FromUtf8Error),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing payload, provide a message, an image or an audio file")]
    MissingPayload,
}
