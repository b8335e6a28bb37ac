//! The Chunk type - one block-aligned unit of codec output.

use bytes::Bytes;
use std::fmt;

/// The output of one iteration of the streaming loop.
///
/// `data` is the transformed payload: Base64 text when encoding, raw bytes
/// when decoding. `offset` and `input_len` locate the input the chunk was
/// produced from, so consecutive chunks cover the input without gaps.
///
/// # Example
///
/// ```
/// use chunk64::Chunk;
/// use bytes::Bytes;
///
/// let chunk = Chunk {
///     data: Bytes::from_static(b"aGVsbG8="),
///     offset: 0,
///     input_len: 5,
/// };
///
/// assert_eq!(chunk.as_str(), Some("aGVsbG8="));
/// assert_eq!(chunk.input_range(), 0..5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The transformed data.
    pub data: Bytes,

    /// Offset of the consumed input in the source stream.
    pub offset: u64,

    /// Number of input bytes consumed to produce `data`.
    pub input_len: usize,
}

impl Chunk {
    /// Returns the length of the transformed data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the chunk has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the data as text, if it is valid UTF-8.
    ///
    /// Always `Some` for encoded chunks.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.data).ok()
    }

    /// Returns the range of input this chunk was produced from.
    pub fn input_range(&self) -> std::ops::Range<u64> {
        self.offset..self.offset + self.input_len as u64
    }

    /// Consumes the chunk and returns the underlying data.
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl AsRef<[u8]> for Chunk {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chunk({} bytes from input {}..{})",
            self.data.len(),
            self.offset,
            self.offset + self.input_len as u64
        )
    }
}
