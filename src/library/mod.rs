//! File-level Base64 operations.
//!
//! [`Base64Library`] exposes the four conversions a test-automation adapter
//! registers as keywords:
//!
//! - [`Base64Library::file_to_base64`] - file to in-memory Base64 string
//! - [`Base64Library::base64_to_file`] - Base64 string to file
//! - [`Base64Library::file_to_base64_file`] - streaming file to Base64 file
//! - [`Base64Library::base64_file_to_file`] - streaming Base64 file to file
//!
//! Every call is synchronous and owns its file handles for its own duration
//! only. A failure part-way through a streaming call can leave a truncated
//! destination; the operations are not atomic.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::codec::{self, Decoder, Encoder};
use crate::config::LibraryConfig;
use crate::error::{Base64Error, Result};
use crate::size::{self, Block, ChunkSize};
use crate::util::{create_destination, open_source};

/// Base64 file conversions bound to one [`LibraryConfig`].
///
/// # Example
///
/// ```no_run
/// use chunk64::{Base64Library, LibraryConfig};
///
/// let lib = Base64Library::new(LibraryConfig::default());
///
/// let text = lib.file_to_base64("small.txt", None)?;
/// lib.base64_to_file(&text, "copy.txt")?;
///
/// lib.file_to_base64_file("huge.iso", "encoded.txt", Some("5MB".into()))?;
/// lib.base64_file_to_file("encoded.txt", "huge-copy.iso", Some("4MB".into()))?;
/// # Ok::<(), chunk64::Base64Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Base64Library {
    config: LibraryConfig,
}

impl Base64Library {
    /// Creates a library using the given configuration.
    pub fn new(config: LibraryConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    fn resolve(&self, chunk_size: Option<&ChunkSize>, block: Block) -> Result<usize> {
        size::resolve(chunk_size, self.config.default_chunk_size(), block)
    }

    /// Encodes a file into a Base64 string.
    ///
    /// The file is read in chunks of `chunk_size` bytes (a multiple of 3) and
    /// each chunk is encoded on its own; the result equals a single-shot
    /// encoding. The whole string is held in memory.
    ///
    /// # Errors
    ///
    /// [`Base64Error::InvalidChunkSize`], [`Base64Error::SourceNotFound`] or
    /// [`Base64Error::SourceReadError`].
    pub fn file_to_base64(&self, file_path: impl AsRef<Path>, chunk_size: Option<ChunkSize>) -> Result<String> {
        let path = file_path.as_ref();
        let chunk_size = self.resolve(chunk_size.as_ref(), Block::Encode)?;
        let file = open_source(path)?;

        let text = Encoder::new(chunk_size)
            .encode_to_string(file)
            .map_err(|e| e.with_paths(path, path))?;

        info!(path = %path.display(), chars = text.len(), "encoded file to base64");
        Ok(text)
    }

    /// Decodes a Base64 string and writes the bytes to `output_path`.
    ///
    /// The string is decoded as one unit before the output is touched, so
    /// invalid input leaves an existing file intact. An existing file is
    /// overwritten.
    ///
    /// # Errors
    ///
    /// [`Base64Error::InvalidBase64Content`] or
    /// [`Base64Error::DestinationWriteError`].
    pub fn base64_to_file(&self, base64_text: &str, output_path: impl AsRef<Path>) -> Result<()> {
        let path = output_path.as_ref();
        let data = codec::decode(base64_text)?;

        let mut file = create_destination(path, self.config.create_parent_dirs())?;
        file.write_all(&data)
            .map_err(|source| Base64Error::DestinationWriteError {
                path: path.to_path_buf(),
                source,
            })?;

        info!(path = %path.display(), bytes = data.len(), "created file from base64 string");
        Ok(())
    }

    /// Streams a file into a Base64 text file.
    ///
    /// Reads `chunk_size` bytes (a multiple of 3) at a time and writes each
    /// encoded chunk immediately, so memory use is bounded by one chunk of
    /// each representation regardless of file size.
    ///
    /// # Errors
    ///
    /// [`Base64Error::InvalidChunkSize`], [`Base64Error::SourceNotFound`],
    /// [`Base64Error::SourceReadError`] or
    /// [`Base64Error::DestinationWriteError`].
    pub fn file_to_base64_file(
        &self,
        input_path: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
        chunk_size: Option<ChunkSize>,
    ) -> Result<()> {
        let (input, output) = (input_path.as_ref(), output_path.as_ref());
        let chunk_size = self.resolve(chunk_size.as_ref(), Block::Encode)?;
        let source = open_source(input)?;
        let dest = create_destination(output, self.config.create_parent_dirs())?;

        let stats = Encoder::new(chunk_size)
            .encode_to_writer(source, dest)
            .map_err(|e| e.with_paths(input, output))?;

        info!(
            input = %input.display(),
            output = %output.display(),
            chunk_size,
            chunks = stats.chunks,
            chars = stats.bytes_written,
            "stream-encoded file to base64 file"
        );
        Ok(())
    }

    /// Streams a Base64 text file into a binary file.
    ///
    /// Reads `chunk_size` characters (a multiple of 4) at a time and writes
    /// each decoded chunk immediately.
    ///
    /// # Errors
    ///
    /// [`Base64Error::InvalidChunkSize`], [`Base64Error::SourceNotFound`],
    /// [`Base64Error::SourceReadError`],
    /// [`Base64Error::DestinationWriteError`] or
    /// [`Base64Error::InvalidBase64Content`]. Bytes decoded before an invalid
    /// chunk stay in the destination.
    pub fn base64_file_to_file(
        &self,
        input_path: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
        chunk_size: Option<ChunkSize>,
    ) -> Result<()> {
        let (input, output) = (input_path.as_ref(), output_path.as_ref());
        let chunk_size = self.resolve(chunk_size.as_ref(), Block::Decode)?;
        let source = open_source(input)?;
        let dest = create_destination(output, self.config.create_parent_dirs())?;

        let stats = Decoder::new(chunk_size)
            .decode_to_writer(source, dest)
            .map_err(|e| e.with_paths(input, output))?;

        info!(
            input = %input.display(),
            output = %output.display(),
            chunk_size,
            chunks = stats.chunks,
            bytes = stats.bytes_written,
            "stream-decoded base64 file to file"
        );
        Ok(())
    }
}
