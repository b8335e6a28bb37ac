//! Configuration for the keyword library.
//!
//! - [`LibraryConfig`] - Default chunk size and output directory handling
//!
//! # Example
//!
//! ```
//! use chunk64::LibraryConfig;
//!
//! // 1 MiB chunks, fail instead of creating missing output directories
//! let config = LibraryConfig::new(1024 * 1024)?
//!     .with_create_parent_dirs(false);
//!
//! assert_eq!(config.default_chunk_size(), 1024 * 1024);
//! # Ok::<(), chunk64::Base64Error>(())
//! ```

use crate::error::{Base64Error, Result};

/// Default chunk size (3 MiB), a multiple of both 3 and 4.
pub const DEFAULT_CHUNK_SIZE: usize = 3 * 1024 * 1024;

/// Configuration bound into a [`crate::Base64Library`] at construction.
///
/// The default chunk size applies to every call that does not pass its own
/// size. It is aligned per call: down to a multiple of 3 when encoding and
/// of 4 when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LibraryConfig {
    default_chunk_size: usize,
    create_parent_dirs: bool,
}

impl LibraryConfig {
    /// Creates a new configuration with the given default chunk size.
    ///
    /// # Errors
    ///
    /// Returns [`Base64Error::InvalidChunkSize`] if the size is zero.
    pub fn new(default_chunk_size: usize) -> Result<Self> {
        if default_chunk_size == 0 {
            return Err(Base64Error::InvalidChunkSize {
                spec: default_chunk_size.to_string(),
                reason: "default chunk size must be positive",
            });
        }

        Ok(Self {
            default_chunk_size,
            create_parent_dirs: true,
        })
    }

    /// Sets the default chunk size.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`LibraryConfig::validate`] to check it.
    pub fn with_default_chunk_size(mut self, size: usize) -> Self {
        self.default_chunk_size = size;
        self
    }

    /// Sets whether missing parent directories of output paths are created.
    pub fn with_create_parent_dirs(mut self, create: bool) -> Self {
        self.create_parent_dirs = create;
        self
    }

    /// Returns the default chunk size.
    pub fn default_chunk_size(&self) -> usize {
        self.default_chunk_size
    }

    /// Returns whether missing parent directories are created.
    pub fn create_parent_dirs(&self) -> bool {
        self.create_parent_dirs
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<()> {
        Self::new(self.default_chunk_size).map(|_| ())
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            default_chunk_size: DEFAULT_CHUNK_SIZE,
            create_parent_dirs: true,
        }
    }
}
