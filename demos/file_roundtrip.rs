//! File round-trip example.
//!
//! Run with:
//!     RUST_LOG=chunk64=debug cargo run --example file_roundtrip -- /path/to/file [chunk-size]

use std::env;
use std::fs;

use chunk64::{Base64Library, ChunkSize, LibraryConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "Cargo.toml".to_string());
    let chunk_size = args.next().map(ChunkSize::from);

    println!("Converting file: {}\n", path);

    let workdir = tempfile::tempdir()?;
    let encoded = workdir.path().join("encoded/file.b64");
    let restored = workdir.path().join("restored/file.bin");

    let lib = Base64Library::new(LibraryConfig::new(64 * 1024)?);

    lib.file_to_base64_file(&path, &encoded, chunk_size.clone())?;
    lib.base64_file_to_file(&encoded, &restored, chunk_size)?;

    let original = fs::metadata(&path)?.len();
    let text = fs::metadata(&encoded)?.len();
    println!("Original: {:>12} bytes", original);
    println!("Encoded:  {:>12} chars", text);

    let same = fs::read(&path)? == fs::read(&restored)?;
    println!("Round trip {}", if same { "OK" } else { "MISMATCH" });

    Ok(())
}
