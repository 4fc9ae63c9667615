use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::media::payload::PayloadType;
use crate::result::Result;
use crate::StegoError;

pub const SECRET_MESSAGE_FILE_STEM: &str = "secret-message";
pub const SECRET_IMAGE_FILE_STEM: &str = "secret-image";
pub const SECRET_AUDIO_FILE_STEM: &str = "secret-audio";

/// A typed payload, either to be hidden in or as unveiled from a carrier.
///
/// Binary payloads are not validated, an `Image` is not checked to be a
/// well-formed image file. That is up to whoever rehydrates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Text(String),
    Image(Vec<u8>),
    Audio(Vec<u8>),
}

impl Message {
    /// Creates a message from bytes tagged with their type, text has to be valid UTF-8.
    pub fn from_raw_data(payload_type: PayloadType, content: Vec<u8>) -> Result<Self> {
        Ok(match payload_type {
            PayloadType::Text => Message::Text(String::from_utf8(content)?),
            PayloadType::Image => Message::Image(content),
            PayloadType::Audio => Message::Audio(content),
        })
    }

    /// Creates a new message with the given text.
    pub fn text<S: Into<String>>(text: S) -> Self {
        Message::Text(text.into())
    }

    /// Creates a new message with the content of the given file.
    pub fn from_file<P: AsRef<Path> + ?Sized>(payload_type: PayloadType, file: &P) -> Result<Self> {
        let mut fd = File::open(file).map_err(|source| StegoError::ReadError { source })?;
        let mut fb: Vec<u8> = Vec::new();
        fd.read_to_end(&mut fb)
            .map_err(|source| StegoError::ReadError { source })?;

        Self::from_raw_data(payload_type, fb)
    }

    pub fn payload_type(&self) -> PayloadType {
        match self {
            Message::Text(_) => PayloadType::Text,
            Message::Image(_) => PayloadType::Image,
            Message::Audio(_) => PayloadType::Audio,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Message::Text(text) => text.as_bytes(),
            Message::Image(data) | Message::Audio(data) => data.as_slice(),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Message::Text(text) => text.into_bytes(),
            Message::Image(data) | Message::Audio(data) => data,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// A file name to store the unveiled payload under, the extension is sniffed from the content.
    pub fn file_name(&self) -> String {
        match self {
            Message::Text(_) => format!("{SECRET_MESSAGE_FILE_STEM}.txt"),
            Message::Image(data) => {
                let ext = image::guess_format(data)
                    .ok()
                    .and_then(|format| format.extensions_str().first().copied())
                    .unwrap_or("bin");
                format!("{SECRET_IMAGE_FILE_STEM}.{ext}")
            }
            Message::Audio(data) => {
                let ext = if data.starts_with(b"RIFF") { "wav" } else { "bin" };
                format!("{SECRET_AUDIO_FILE_STEM}.{ext}")
            }
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::text(text)
    }
}
