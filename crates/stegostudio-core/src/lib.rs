//! # StegoStudio Core API
//!
//! Hides a text message, an image file or an audio file in the least
//! significant bits of the R, G and B channels of an RGBA image.
//!
//! The hidden bits start with a 5 byte container header, a type code (0 text,
//! 1 image, 2 audio) followed by the payload length as little endian `u32`,
//! followed by the payload itself. Each byte is stored most significant bit
//! first, the alpha channel is never touched.
//!
//! There are two layers:
//! - [`embed`] / [`decode`] operate on an in-memory [`PixelBuffer`]
//! - [`api::hide`], [`api::unveil`], [`api::unveil_raw`] and [`api::capacity`] operate on files
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use stegostudio_core::media::PixelBuffer;
//! use stegostudio_core::{capacity, decode, hide, Message};
//!
//! let mut carrier = PixelBuffer::new(64, 64);
//! assert_eq!(capacity(&carrier), 1531);
//!
//! hide(&mut carrier, &Message::text("Hello, World!")).expect("Failed to hide message");
//! assert_eq!(decode(&carrier).unwrap(), Message::text("Hello, World!"));
//! ```
//!
//! ## Hide a message inside an image file
//!
//! ```rust
//! use stegostudio_core::media::{Persist, PixelBuffer};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! PixelBuffer::new(64, 64).save_as(&carrier).expect("Failed to write carrier");
//!
//! stegostudio_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("image-with-a-secret.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let unveiled = stegostudio_core::api::unveil::prepare()
//!     .from_secret_file(temp_dir.path().join("image-with-a-secret.png"))
//!     .into_output_folder(temp_dir.path())
//!     .execute()
//!     .expect("Failed to unveil message from image");
//! assert_eq!(unveiled, temp_dir.path().join("secret-message.txt"));
//! ```

#![warn(clippy::redundant_else)]

pub mod bit_iterator;
pub use bit_iterator::BitIterator;

pub mod message;
pub use message::*;

pub mod api;
pub mod capacity;
pub mod codec;
pub mod commands;
pub mod error;
pub mod media;
pub mod result;

pub use crate::capacity::{capacity, capacity_for_dimensions};
pub use crate::codec::{decode, embed, hide, unveil_raw};
pub use crate::error::StegoError;
pub use crate::media::payload::PayloadType;
pub use crate::media::{CodecOptions, PixelBuffer};
pub use crate::result::Result;
