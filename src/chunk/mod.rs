//! Chunk type.
//!
//! - [`Chunk`] - One transformed chunk with the input range it came from

mod data;

pub use data::Chunk;
