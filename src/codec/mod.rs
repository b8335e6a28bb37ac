//! Block-aligned streaming Base64 codec.
//!
//! - [`Encoder`] / [`EncodeIter`] - Raw bytes in, Base64 text out, one chunk
//!   of `3n` bytes at a time
//! - [`Decoder`] / [`DecodeIter`] - Base64 text in, raw bytes out, one chunk
//!   of `4n` characters at a time
//!
//! Because every chunk boundary falls on a Base64 block boundary, encoding or
//! decoding chunk by chunk produces exactly the output of a single-shot
//! conversion, and padding can only appear in the final chunk.
//!
//! # Example
//!
//! ```
//! use chunk64::{Decoder, Encoder};
//! use std::io::Cursor;
//!
//! let text = Encoder::new(3).encode_to_string(Cursor::new(b"hello world"))?;
//! assert_eq!(text, "aGVsbG8gd29ybGQ=");
//!
//! let mut out = Vec::new();
//! Decoder::new(4).decode_to_writer(Cursor::new(text), &mut out)?;
//! assert_eq!(out, b"hello world");
//! # Ok::<(), chunk64::Base64Error>(())
//! ```

mod decoder;
mod encoder;

pub use decoder::{DecodeIter, Decoder};
pub use encoder::{EncodeIter, Encoder};

use base64::alphabet;
use base64::engine::DecodePaddingMode;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

use crate::error::{Base64Error, Result};

/// Standard alphabet, padded output; final-block padding optional on input.
pub(crate) const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Counters for one reader-to-writer conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Number of chunks processed.
    pub chunks: u64,
    /// Bytes consumed from the reader.
    pub bytes_read: u64,
    /// Bytes written to the writer.
    pub bytes_written: u64,
}

impl StreamStats {
    pub(crate) fn record(&mut self, read: usize, written: usize) {
        self.chunks += 1;
        self.bytes_read += read as u64;
        self.bytes_written += written as u64;
    }
}

/// Encodes a whole buffer in one shot.
pub fn encode(data: &[u8]) -> String {
    ENGINE.encode(data)
}

/// Decodes a whole Base64 string in one shot.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidBase64Content`] with offset 0 if the text
/// is not valid Base64.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    ENGINE
        .decode(text)
        .map_err(|source| Base64Error::InvalidBase64Content { offset: 0, source })
}
