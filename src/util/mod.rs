//! Internal utility functions and helpers.
//!
//! This module contains small helper functions used throughout the crate.
//! It is an implementation detail and not part of the public API.

use std::fs::{self, File};
use std::io::{self, ErrorKind, Read};
use std::path::Path;

use crate::error::{Base64Error, Result};

/// Reads the next chunk of at most `limit` bytes into `buf`.
///
/// `buf` is cleared first and keeps its capacity across calls. Returns the
/// number of bytes read; anything short of `limit` means end of stream. A
/// single `read` may return less than requested, which would split a Base64
/// block, so this keeps reading until the limit or end of stream.
pub(crate) fn read_chunk<R: Read>(reader: &mut R, limit: usize, buf: &mut Vec<u8>) -> io::Result<usize> {
    buf.clear();
    reader.by_ref().take(limit as u64).read_to_end(buf)
}

/// Opens an input file, telling a missing path apart from other failures.
pub(crate) fn open_source(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Base64Error::SourceNotFound {
            path: path.to_path_buf(),
        },
        _ => Base64Error::SourceReadError {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

/// Creates (or truncates) an output file, optionally creating its parent
/// directories first.
pub(crate) fn create_destination(path: &Path, create_parents: bool) -> Result<File> {
    let dest_err = |e: io::Error| Base64Error::DestinationWriteError {
        path: path.to_path_buf(),
        source: e,
    };

    if create_parents {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(dest_err)?;
        }
    }

    File::create(path).map_err(dest_err)
}
