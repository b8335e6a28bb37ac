//! Chunk size resolution.
//!
//! - [`ChunkSize`] - Caller-supplied size, either a byte count or a string
//!   such as `"5MB"`
//! - [`Block`] - Which Base64 block the resolved size is aligned to
//! - [`resolve`] - Applies the default, parses and aligns
//!
//! # Example
//!
//! ```
//! use chunk64::{Block, ChunkSize, size};
//!
//! let spec = ChunkSize::from("10KB");
//! let n = size::resolve(Some(&spec), 1024, Block::Encode)?;
//! assert_eq!(n, 10 * 1024 / 3 * 3);
//!
//! assert_eq!(size::resolve(None, 1024, Block::Decode)?, 1024);
//! # Ok::<(), chunk64::Base64Error>(())
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Base64Error, Result};

const KIB: f64 = 1024.0;

static SIZE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d+(?:\.\d+)?)\s*(B|KB|MB|GB)?$").expect("size pattern is valid")
});

/// A chunk size as given by a caller.
///
/// Integers are byte counts; strings follow `^\d+(\.\d+)?\s*(B|KB|MB|GB)?$`
/// case-insensitively, with binary multiples and bytes as the default unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChunkSize {
    /// A raw byte count.
    Bytes(i64),
    /// A human-readable size such as `"3MB"` or `"1.5 kb"`.
    Text(String),
}

impl From<i64> for ChunkSize {
    fn from(n: i64) -> Self {
        ChunkSize::Bytes(n)
    }
}

impl From<i32> for ChunkSize {
    fn from(n: i32) -> Self {
        ChunkSize::Bytes(n.into())
    }
}

impl From<usize> for ChunkSize {
    fn from(n: usize) -> Self {
        ChunkSize::Bytes(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<&str> for ChunkSize {
    fn from(s: &str) -> Self {
        ChunkSize::Text(s.to_owned())
    }
}

impl From<String> for ChunkSize {
    fn from(s: String) -> Self {
        ChunkSize::Text(s)
    }
}

impl fmt::Display for ChunkSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkSize::Bytes(n) => write!(f, "{}", n),
            ChunkSize::Text(s) => f.write_str(s),
        }
    }
}

/// The Base64 block a chunk must be aligned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    /// Raw input: 3 bytes per block.
    Encode,
    /// Encoded input: 4 characters per block.
    Decode,
}

impl Block {
    /// Returns the block length in bytes.
    pub const fn width(self) -> usize {
        match self {
            Block::Encode => 3,
            Block::Decode => 4,
        }
    }
}

/// Rounds `n` down to a multiple of the block length, never below one block.
pub fn align(n: usize, block: Block) -> usize {
    let b = block.width();
    (n / b * b).max(b)
}

/// Parses a size string into a byte count without aligning it.
///
/// Fractional magnitudes are multiplied out and floored, so `"1.5KB"` is
/// 1536 bytes and `"0.5B"` is rejected as zero.
pub fn parse_size(spec: &str) -> Result<usize> {
    let invalid = |reason: &'static str| Base64Error::InvalidChunkSize {
        spec: spec.to_owned(),
        reason,
    };

    let caps = SIZE_PATTERN
        .captures(spec.trim())
        .ok_or_else(|| invalid("expected a number with an optional B/KB/MB/GB unit"))?;

    let magnitude: f64 = caps[1]
        .parse()
        .map_err(|_| invalid("magnitude is not a number"))?;

    let unit = match caps.get(2).map(|m| m.as_str().to_ascii_uppercase()) {
        None => 1.0,
        Some(u) => match u.as_str() {
            "B" => 1.0,
            "KB" => KIB,
            "MB" => KIB * KIB,
            _ => KIB * KIB * KIB,
        },
    };

    let bytes = (magnitude * unit).floor();
    if bytes < 1.0 {
        return Err(invalid("chunk size must be positive"));
    }
    if !bytes.is_finite() || bytes >= usize::MAX as f64 {
        return Err(invalid("chunk size is too large"));
    }

    Ok(bytes as usize)
}

/// Resolves an optional chunk size into an aligned byte count.
///
/// `None` selects `default`. The result is rounded down to a multiple of
/// the block length with a floor of one block.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidChunkSize`] if the integer or the default
/// is not positive, or the string does not parse.
pub fn resolve(spec: Option<&ChunkSize>, default: usize, block: Block) -> Result<usize> {
    let bytes = match spec {
        None => {
            if default == 0 {
                return Err(Base64Error::InvalidChunkSize {
                    spec: default.to_string(),
                    reason: "default chunk size must be positive",
                });
            }
            default
        }
        Some(ChunkSize::Bytes(n)) => {
            if *n <= 0 {
                return Err(Base64Error::InvalidChunkSize {
                    spec: n.to_string(),
                    reason: "chunk size must be positive",
                });
            }
            usize::try_from(*n).map_err(|_| Base64Error::InvalidChunkSize {
                spec: n.to_string(),
                reason: "chunk size is too large",
            })?
        }
        Some(ChunkSize::Text(s)) => parse_size(s)?,
    };

    let aligned = align(bytes, block);
    tracing::debug!(requested = bytes, aligned, ?block, "resolved chunk size");
    Ok(aligned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_uses_default() {
        assert_eq!(resolve(None, 1024, Block::Encode).unwrap(), 1023);
        assert_eq!(resolve(None, 1024, Block::Decode).unwrap(), 1024);
        assert_eq!(resolve(None, 3 * 1024, Block::Encode).unwrap(), 3 * 1024);
    }

    #[test]
    fn test_zero_default_rejected() {
        assert!(matches!(
            resolve(None, 0, Block::Encode),
            Err(Base64Error::InvalidChunkSize { .. })
        ));
    }

    #[test]
    fn test_integer_sizes() {
        assert_eq!(resolve(Some(&30.into()), 9, Block::Encode).unwrap(), 30);
        assert_eq!(resolve(Some(&10.into()), 9, Block::Encode).unwrap(), 9);
        assert_eq!(resolve(Some(&10.into()), 9, Block::Decode).unwrap(), 8);
        assert!(resolve(Some(&0.into()), 9, Block::Encode).is_err());
        assert!(resolve(Some(&(-3).into()), 9, Block::Encode).is_err());
    }

    #[test]
    fn test_small_sizes_round_up_to_one_block() {
        assert_eq!(resolve(Some(&1.into()), 9, Block::Encode).unwrap(), 3);
        assert_eq!(resolve(Some(&2.into()), 9, Block::Decode).unwrap(), 4);
    }

    #[test]
    fn test_megabytes() {
        let five_mb = 5 * 1024 * 1024;
        let spec = ChunkSize::from("5MB");
        assert_eq!(
            resolve(Some(&spec), 1, Block::Encode).unwrap(),
            five_mb / 3 * 3
        );
        assert_eq!(resolve(Some(&spec), 1, Block::Decode).unwrap(), five_mb);
    }

    #[test]
    fn test_units_case_insensitive() {
        assert_eq!(parse_size("10kb").unwrap(), 10 * 1024);
        assert_eq!(parse_size("10Kb").unwrap(), 10 * 1024);
        assert_eq!(parse_size("2 MB").unwrap(), 2 * 1024 * 1024);
        assert_eq!(parse_size("1gb").unwrap(), 1024 * 1024 * 1024);
        assert_eq!(parse_size("42").unwrap(), 42);
        assert_eq!(parse_size("42b").unwrap(), 42);
        assert_eq!(parse_size(" 7 B ").unwrap(), 7);
    }

    #[test]
    fn test_fractional_magnitude() {
        assert_eq!(parse_size("1.5KB").unwrap(), 1536);
        assert_eq!(parse_size("2.7").unwrap(), 2);
    }

    #[test]
    fn test_zero_and_garbage_rejected() {
        for spec in ["0KB", "0", "0.5B", "", "KB", "-5MB", "5TB", "5 M B", "1e3", ".5KB"] {
            assert!(
                matches!(parse_size(spec), Err(Base64Error::InvalidChunkSize { .. })),
                "{spec:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        for spec in ["18446744073709551616", "17179869184GB", "99999999999999999999999GB"] {
            assert!(
                matches!(parse_size(spec), Err(Base64Error::InvalidChunkSize { .. })),
                "{spec:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_align() {
        assert_eq!(align(0, Block::Encode), 3);
        assert_eq!(align(7, Block::Encode), 6);
        assert_eq!(align(7, Block::Decode), 4);
        assert_eq!(align(16, Block::Decode), 16);
    }

    #[test]
    fn test_chunk_size_display() {
        assert_eq!(ChunkSize::from(12).to_string(), "12");
        assert_eq!(ChunkSize::from("3MB").to_string(), "3MB");
    }
}
