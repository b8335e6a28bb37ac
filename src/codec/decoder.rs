//! Streaming decoder - Decoder and DecodeIter.
//!
//! The decoder reads Base64 text in chunks whose length is a multiple of 4,
//! so no block is ever split across reads. Padding on the final block is
//! optional. Padding followed by more input is rejected, so chunked decoding
//! fails on exactly the inputs a single-shot decode fails on.

use std::io::{Read, Write};

use base64::{DecodeError, Engine as _};
use bytes::Bytes;

use super::{ENGINE, StreamStats};
use crate::chunk::Chunk;
use crate::error::{Base64Error, Result};
use crate::size::{Block, align};
use crate::util::read_chunk;

/// Decodes Base64 text streams in block-aligned chunks.
///
/// # Example
///
/// ```
/// use chunk64::Decoder;
/// use std::io::Cursor;
///
/// let mut out = Vec::new();
/// let stats = Decoder::new(4).decode_to_writer(Cursor::new("YWJjZA=="), &mut out)?;
///
/// assert_eq!(out, b"abcd");
/// assert_eq!(stats.chunks, 2);
/// # Ok::<(), chunk64::Base64Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    chunk_size: usize,
}

impl Decoder {
    /// Creates a decoder reading `chunk_size` encoded characters per chunk.
    ///
    /// The size is rounded down to a multiple of 4, never below 4.
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: align(chunk_size, Block::Decode),
        }
    }

    /// Returns the aligned chunk size in encoded characters.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Creates an iterator yielding one decoded [`Chunk`] per read.
    pub fn decode<R: Read>(&self, reader: R) -> DecodeIter<R> {
        DecodeIter::new(reader, self.chunk_size)
    }

    /// Streams Base64 text from the reader into the writer as raw bytes.
    ///
    /// At most one encoded chunk and one decoded chunk are held in memory.
    pub fn decode_to_writer<R: Read, W: Write>(&self, reader: R, mut writer: W) -> Result<StreamStats> {
        let mut iter = self.decode(reader);
        let mut data = Vec::new();
        let mut stats = StreamStats::default();

        loop {
            data.clear();
            let read = iter.decode_next(&mut data)?;
            if read == 0 {
                break;
            }
            writer.write_all(&data).map_err(Base64Error::Write)?;
            stats.record(read, data.len());
        }

        writer.flush().map_err(Base64Error::Write)?;
        Ok(stats)
    }
}

/// An iterator that decodes a Base64 reader chunk by chunk.
///
/// After an error the iterator is exhausted.
pub struct DecodeIter<R> {
    reader: R,
    chunk_size: usize,
    buf: Vec<u8>,
    offset: u64,
    padded: bool,
    finished: bool,
}

impl<R: Read> DecodeIter<R> {
    fn new(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            chunk_size,
            buf: Vec::new(),
            offset: 0,
            padded: false,
            finished: false,
        }
    }

    /// Returns the number of encoded characters consumed so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Reads the next chunk and appends the decoded bytes to `out`.
    ///
    /// Returns the number of encoded characters consumed; 0 means the input
    /// is exhausted.
    pub fn decode_next(&mut self, out: &mut Vec<u8>) -> Result<usize> {
        if self.finished {
            return Ok(0);
        }

        let n = match read_chunk(&mut self.reader, self.chunk_size, &mut self.buf) {
            Ok(n) => n,
            Err(e) => {
                self.finished = true;
                return Err(Base64Error::Read(e));
            }
        };

        if n < self.chunk_size {
            self.finished = true;
        }
        if n == 0 {
            return Ok(0);
        }

        // The previous chunk ended in padding, so this one is trailing data.
        if self.padded {
            self.finished = true;
            return Err(Base64Error::InvalidBase64Content {
                offset: self.offset,
                source: DecodeError::InvalidPadding,
            });
        }

        if let Err(source) = ENGINE.decode_vec(&self.buf, out) {
            self.finished = true;
            return Err(Base64Error::InvalidBase64Content {
                offset: self.offset,
                source,
            });
        }

        self.padded = self.buf.last() == Some(&b'=');
        tracing::trace!(offset = self.offset, len = n, "decoded chunk");
        self.offset += n as u64;
        Ok(n)
    }

    /// Consumes the iterator, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Iterator for DecodeIter<R> {
    type Item = Result<Chunk>;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.offset;
        let mut data = Vec::new();
        match self.decode_next(&mut data) {
            Ok(0) => None,
            Ok(n) => Some(Ok(Chunk {
                data: Bytes::from(data),
                offset,
                input_len: n,
            })),
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use std::io::Cursor;

    fn sample(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 31 + 7) as u8).collect()
    }

    #[test]
    fn test_chunk_size_aligned() {
        assert_eq!(Decoder::new(10).chunk_size(), 8);
        assert_eq!(Decoder::new(3).chunk_size(), 4);
    }

    #[test]
    fn test_empty_input() {
        let mut out = Vec::new();
        let stats = Decoder::new(4)
            .decode_to_writer(Cursor::new(""), &mut out)
            .unwrap();
        assert!(out.is_empty());
        assert_eq!(stats, StreamStats::default());
    }

    #[test]
    fn test_matches_single_shot_for_many_sizes() {
        for len in [1, 2, 3, 4, 5, 99, 100, 1000] {
            let data = sample(len);
            let text = ENGINE.encode(&data);
            for size in [4, 8, 12, 40, 400, 4000] {
                let mut out = Vec::new();
                Decoder::new(size)
                    .decode_to_writer(Cursor::new(&text), &mut out)
                    .unwrap();
                assert_eq!(out, data, "len={len} size={size}");
            }
        }
    }

    #[test]
    fn test_unpadded_tail() {
        let chunks: Vec<_> = Decoder::new(4)
            .decode(Cursor::new("YWJjZA"))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(&chunks[0].data[..], b"abc");
        assert_eq!(&chunks[1].data[..], b"d");
        assert_eq!(chunks[1].input_range(), 4..6);
    }

    #[test]
    fn test_invalid_character_reports_chunk_offset() {
        let mut iter = Decoder::new(4).decode(Cursor::new("YWJjZ*=="));
        assert!(iter.next().unwrap().is_ok());
        match iter.next() {
            Some(Err(Base64Error::InvalidBase64Content { offset, source })) => {
                assert_eq!(offset, 4);
                assert!(matches!(source, DecodeError::InvalidByte(_, b'*')));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_padding_before_end_rejected() {
        // "YQ==" is a complete padded block; anything after it is invalid,
        // even when it starts a new chunk.
        let mut out = Vec::new();
        let err = Decoder::new(4)
            .decode_to_writer(Cursor::new("YQ==YWJj"), &mut out)
            .unwrap_err();
        assert!(matches!(
            err,
            Base64Error::InvalidBase64Content {
                offset: 4,
                source: DecodeError::InvalidPadding
            }
        ));
        assert!(ENGINE.decode("YQ==YWJj").is_err());
    }

    #[test]
    fn test_invalid_length_rejected() {
        let mut out = Vec::new();
        let err = Decoder::new(4)
            .decode_to_writer(Cursor::new("YWJjZ"), &mut out)
            .unwrap_err();
        assert!(matches!(err, Base64Error::InvalidBase64Content { offset: 4, .. }));
    }

    #[test]
    fn test_trailing_newline_rejected() {
        let mut out = Vec::new();
        let result = Decoder::new(8).decode_to_writer(Cursor::new("YWJj\n"), &mut out);
        assert!(matches!(result, Err(Base64Error::InvalidBase64Content { .. })));
    }

    #[test]
    fn test_offset_tracks_consumed_characters() {
        let text = ENGINE.encode(sample(10));
        let mut iter = Decoder::new(8).decode(Cursor::new(text.clone()));
        assert_eq!(iter.offset(), 0);

        let mut consumed = 0u64;
        for chunk in iter.by_ref() {
            consumed += chunk.unwrap().input_len as u64;
        }
        assert_eq!(iter.offset(), consumed);
        assert_eq!(consumed, text.len() as u64);
    }

    #[test]
    fn test_into_inner_returns_reader_after_input() {
        let mut iter = Decoder::new(4).decode(Cursor::new("YWJjZA=="));
        let first = iter.next().unwrap().unwrap();
        assert_eq!(first.into_data(), Bytes::from_static(b"abc"));

        let reader = iter.into_inner();
        assert_eq!(reader.position(), 4);
    }
}
