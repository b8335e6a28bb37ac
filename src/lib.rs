//! chunk64
//!
//! Chunked, memory-bounded Base64 conversion between files and text.
//!
//! `chunk64` reads its input in chunks aligned to the Base64 block (3 raw
//! bytes or 4 encoded characters), transforms each chunk and writes it out
//! before reading the next. Output is byte-for-byte identical to a
//! single-shot conversion, while memory use stays bounded by the chunk size.
//! It is designed as the core of a test-automation keyword library:
//!
//! - encode a file into a Base64 string
//! - decode a Base64 string into a file
//! - stream a file into a Base64 file
//! - stream a Base64 file back into a file
//!
//! The crate intentionally:
//! - does NOT compress, encrypt or checksum
//! - does NOT lock files or coordinate concurrent writers
//! - does NOT clean up partial output after a failure
//! - does NOT install a logging subscriber
//!
//! # Keyword library
//!
//! ```no_run
//! use chunk64::{Base64Library, Base64Error, LibraryConfig};
//!
//! fn main() -> Result<(), Base64Error> {
//!     let lib = Base64Library::new(LibraryConfig::default());
//!
//!     lib.file_to_base64_file("huge.iso", "huge.b64", Some("5MB".into()))?;
//!     lib.base64_file_to_file("huge.b64", "huge-copy.iso", None)?;
//!     Ok(())
//! }
//! ```
//!
//! # Streaming codec
//!
//! ```
//! use chunk64::{Encoder, Base64Error};
//! use std::io::Cursor;
//!
//! fn main() -> Result<(), Base64Error> {
//!     for chunk in Encoder::new(3).encode(Cursor::new(b"0123456789")) {
//!         let chunk = chunk?;
//!         println!("{} -> {:?}", chunk, chunk.as_str());
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod codec;
mod config;
mod error;
mod library;
pub mod size;

mod util; // internal file and read helpers

//
// Public surface
//

pub use chunk::Chunk;
pub use codec::{DecodeIter, Decoder, EncodeIter, Encoder, StreamStats, decode, encode};
pub use config::{DEFAULT_CHUNK_SIZE, LibraryConfig};
pub use error::{Base64Error, Result};
pub use library::Base64Library;
pub use size::{Block, ChunkSize};
