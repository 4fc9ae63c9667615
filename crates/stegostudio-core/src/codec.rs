//! The embed and decode pipelines.
//!
//! Both run through the same stages, `Idle → Validating → Streaming → Done`,
//! or end up `Failed`. All validation happens while `Validating`, so a failed
//! embed leaves the carrier untouched.

use std::fmt;
use std::io::Read;

use log::{debug, trace};

use crate::capacity::capacity;
use crate::media::image::LsbCodec;
use crate::media::payload::{ContainerHeader, PayloadType, HEADER_BYTES};
use crate::media::PixelBuffer;
use crate::message::Message;
use crate::result::Result;
use crate::StegoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Validating,
    Streaming,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// logs the final stage of a pipeline run and hands the result through
fn finish<T>(pipeline: &str, result: Result<T>) -> Result<T> {
    match &result {
        Ok(_) => debug!("{pipeline}: {}", Stage::Done),
        Err(e) => debug!("{pipeline}: {} ({e})", Stage::Failed),
    }
    result
}

/// Hides `payload` tagged as `payload_type` in `buffer`.
///
/// The buffer is mutated in place and becomes the new carrier. Fails with
/// [`StegoError::PayloadTooLarge`] if the payload exceeds [`capacity`] and
/// with [`StegoError::EmptyPayload`] for an empty payload; in both cases not
/// a single bit of the buffer has been changed.
///
/// ## Example of usage
/// ```rust
/// use stegostudio_core::media::payload::PayloadType;
/// use stegostudio_core::media::PixelBuffer;
/// use stegostudio_core::{decode, embed, Message};
///
/// let mut carrier = PixelBuffer::new(10, 10);
/// embed(&mut carrier, PayloadType::Text, b"hi!").expect("Cannot hide 3 bytes");
///
/// let message = decode(&carrier).expect("Cannot unveil the message");
/// assert_eq!(message, Message::text("hi!"));
/// ```
pub fn embed(buffer: &mut PixelBuffer, payload_type: PayloadType, payload: &[u8]) -> Result<()> {
    finish("embed", embed_stages(buffer, payload_type, payload))
}

/// Hides a typed [`Message`] in `buffer`, see [`embed`].
pub fn hide(buffer: &mut PixelBuffer, message: &Message) -> Result<()> {
    embed(buffer, message.payload_type(), message.as_bytes())
}

fn embed_stages(buffer: &mut PixelBuffer, payload_type: PayloadType, payload: &[u8]) -> Result<()> {
    debug!("embed: {}", Stage::Validating);
    let capacity = capacity(buffer);
    let payload_len = payload.len();
    if capacity < 1 || payload_len > capacity {
        return Err(StegoError::PayloadTooLarge {
            payload_len,
            capacity,
        });
    }
    if payload.is_empty() {
        return Err(StegoError::EmptyPayload);
    }
    let length = u32::try_from(payload_len).map_err(|_| StegoError::PayloadTooLarge {
        payload_len,
        capacity: u32::MAX as usize,
    })?;
    let header = ContainerHeader::new(payload_type, length);
    trace!("embed: {header:?} into a carrier with capacity {capacity}");

    debug!("embed: {}", Stage::Streaming);
    let mut writer = LsbCodec::encoder(buffer);
    writer.write_bytes(&header.to_bytes())?;
    writer.write_bytes(payload)?;

    Ok(())
}

/// Unveils the payload hidden in `buffer`.
///
/// A carrier that never had anything hidden yields
/// [`StegoError::NoHiddenPayload`]. A text payload that is not valid UTF-8
/// yields [`StegoError::MalformedPayload`].
pub fn decode(buffer: &PixelBuffer) -> Result<Message> {
    finish("decode", decode_stages(buffer))
}

fn decode_stages(buffer: &PixelBuffer) -> Result<Message> {
    debug!("decode: {}", Stage::Validating);
    let capacity = capacity(buffer);
    if capacity < 1 {
        return Err(StegoError::NoHiddenPayload);
    }

    let mut reader = LsbCodec::decoder(buffer);
    let mut raw_header = [0; HEADER_BYTES];
    raw_header.copy_from_slice(&reader.read_bytes(HEADER_BYTES)?);

    let header = ContainerHeader::from_bytes(&raw_header).map_err(|e| {
        trace!("decode: {e}");
        StegoError::NoHiddenPayload
    })?;
    trace!("decode: {header:?} in a carrier with capacity {capacity}");
    let length = header.length as usize;
    if length == 0 || length > capacity {
        return Err(StegoError::NoHiddenPayload);
    }

    debug!("decode: {}", Stage::Streaming);
    let content = reader.read_bytes(length)?;

    Message::from_raw_data(header.payload_type, content)
}

/// Unveils all raw data, no header interpretation is happening.
/// Just a dump of every whole byte the LSBs of `buffer` carry.
pub fn unveil_raw(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    let mut raw = Vec::new();
    LsbCodec::decoder(buffer).read_to_end(&mut raw)?;

    Ok(raw)
}
