//! Streaming encoder - Encoder and EncodeIter.
//!
//! The encoder reads its source in chunks whose length is a multiple of 3
//! and encodes each one independently. Only the final chunk can be shorter,
//! so `=` padding only ever appears at the very end of the output.

use std::io::{Read, Write};

use base64::Engine as _;
use bytes::Bytes;

use super::{ENGINE, StreamStats};
use crate::chunk::Chunk;
use crate::error::{Base64Error, Result};
use crate::size::{Block, align};
use crate::util::read_chunk;

/// Encodes byte streams to Base64 in block-aligned chunks.
///
/// # Example
///
/// ```
/// use chunk64::Encoder;
/// use std::io::Cursor;
///
/// let encoder = Encoder::new(3);
/// let chunks: Vec<_> = encoder
///     .encode(Cursor::new(b"abcdefg"))
///     .collect::<Result<_, _>>()?;
///
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[2].as_str(), Some("Zw=="));
/// # Ok::<(), chunk64::Base64Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    chunk_size: usize,
}

impl Encoder {
    /// Creates an encoder reading `chunk_size` raw bytes per chunk.
    ///
    /// The size is rounded down to a multiple of 3, never below 3.
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: align(chunk_size, Block::Encode),
        }
    }

    /// Returns the aligned chunk size in raw bytes.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Creates an iterator yielding one encoded [`Chunk`] per read.
    pub fn encode<R: Read>(&self, reader: R) -> EncodeIter<R> {
        EncodeIter::new(reader, self.chunk_size)
    }

    /// Encodes the whole reader into a single string.
    ///
    /// The result is held in memory; use [`Encoder::encode_to_writer`] for
    /// large inputs.
    pub fn encode_to_string<R: Read>(&self, reader: R) -> Result<String> {
        let mut iter = self.encode(reader);
        let mut out = String::new();
        while iter.encode_next(&mut out)? > 0 {}
        Ok(out)
    }

    /// Streams the reader into the writer as Base64 text.
    ///
    /// At most one raw chunk and one encoded chunk are held in memory.
    pub fn encode_to_writer<R: Read, W: Write>(&self, reader: R, mut writer: W) -> Result<StreamStats> {
        let mut iter = self.encode(reader);
        let mut text = String::new();
        let mut stats = StreamStats::default();

        loop {
            text.clear();
            let read = iter.encode_next(&mut text)?;
            if read == 0 {
                break;
            }
            writer.write_all(text.as_bytes()).map_err(Base64Error::Write)?;
            stats.record(read, text.len());
        }

        writer.flush().map_err(Base64Error::Write)?;
        Ok(stats)
    }
}

/// An iterator that encodes a reader chunk by chunk.
///
/// Each item covers exactly `chunk_size` input bytes except the last, which
/// covers whatever remains. An empty reader yields nothing. After an error
/// the iterator is exhausted.
pub struct EncodeIter<R> {
    reader: R,
    chunk_size: usize,
    buf: Vec<u8>,
    offset: u64,
    finished: bool,
}

impl<R: Read> EncodeIter<R> {
    fn new(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            chunk_size,
            buf: Vec::new(),
            offset: 0,
            finished: false,
        }
    }

    /// Returns the number of raw bytes consumed so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Reads the next chunk and appends its encoding to `out`.
    ///
    /// Returns the number of raw bytes consumed; 0 means the input is
    /// exhausted.
    pub fn encode_next(&mut self, out: &mut String) -> Result<usize> {
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

        // A short chunk can only be the last one.
        if n < self.chunk_size {
            self.finished = true;
        }
        if n == 0 {
            return Ok(0);
        }

        ENGINE.encode_string(&self.buf, out);
        tracing::trace!(offset = self.offset, len = n, "encoded chunk");
        self.offset += n as u64;
        Ok(n)
    }

    /// Consumes the iterator, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Iterator for EncodeIter<R> {
    type Item = Result<Chunk>;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.offset;
        let mut text = String::new();
        match self.encode_next(&mut text) {
            Ok(0) => None,
            Ok(n) => Some(Ok(Chunk {
                data: Bytes::from(text),
                offset,
                input_len: n,
            })),
            Err(e) => Some(Err(e)),
        }
    }
}
