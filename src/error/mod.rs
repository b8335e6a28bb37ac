//! Error types for chunk64.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Base64Error>;

/// Errors that can occur while resolving chunk sizes or converting data.
#[derive(Debug, Error)]
pub enum Base64Error {
    /// The chunk size specification was malformed or not positive.
    #[error("invalid chunk size {spec:?}: {reason}")]
    InvalidChunkSize {
        /// The specification as given by the caller.
        spec: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The input path does not exist.
    #[error("source not found: {}", .path.display())]
    SourceNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The input path exists but could not be opened or read.
    #[error("cannot read source {}: {source}", .path.display())]
    SourceReadError {
        /// The input path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The output path could not be created or written.
    #[error("cannot write destination {}: {source}", .path.display())]
    DestinationWriteError {
        /// The output path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The decode input is not valid Base64.
    ///
    /// `offset` is the position, in encoded characters, of the chunk that
    /// failed; positions inside `source` are relative to that chunk.
    #[error("invalid base64 content in chunk at offset {offset}: {source}")]
    InvalidBase64Content {
        /// Encoded offset of the failing chunk.
        offset: u64,
        /// The decoder's diagnosis.
        #[source]
        source: base64::DecodeError,
    },

    /// Reading from a generic reader failed.
    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    /// Writing to a generic writer failed.
    #[error("write failed: {0}")]
    Write(#[source] io::Error),
}

impl Base64Error {
    /// Attaches the source and destination paths to a reader/writer failure.
    ///
    /// Errors that already carry their context are returned unchanged.
    pub(crate) fn with_paths(self, input: &Path, output: &Path) -> Self {
        match self {
            Base64Error::Read(e) => Base64Error::SourceReadError {
                path: input.to_path_buf(),
                source: e,
            },
            Base64Error::Write(e) => Base64Error::DestinationWriteError {
                path: output.to_path_buf(),
                source: e,
            },
            other => other,
        }
    }
}
