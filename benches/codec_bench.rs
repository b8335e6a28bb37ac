//! Benchmarks for chunk64.
//!
//! Run with:
//!     cargo bench

use std::io::Cursor;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use chunk64::{Decoder, Encoder};

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [64 * 1024, 1024 * 1024, 10 * 1024 * 1024] {
        // Deterministic pseudo-random data
        let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(format!("streamed_{}kb", size / 1024), &data, |b, data| {
            b.iter(|| {
                let mut out = Vec::with_capacity(data.len() * 4 / 3 + 4);
                let stats = Encoder::new(64 * 1024 * 3)
                    .encode_to_writer(Cursor::new(black_box(data)), &mut out)
                    .unwrap();
                black_box(stats.bytes_written)
            });
        });

        group.bench_with_input(format!("whole_{}kb", size / 1024), &data, |b, data| {
            b.iter(|| black_box(chunk64::encode(black_box(data)).len()));
        });
    }

    group.finish();
}

fn bench_chunk_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_sizes");
    let size = 1024 * 1024; // 1 MB
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();
    let text = chunk64::encode(&data);

    group.throughput(Throughput::Bytes(size as u64));
    for chunk_size in [3 * 1024, 48 * 1024, 768 * 1024] {
        group.bench_function(format!("encode_{}", chunk_size), |b| {
            b.iter(|| {
                let mut out = Vec::new();
                Encoder::new(chunk_size)
                    .encode_to_writer(Cursor::new(black_box(&data)), &mut out)
                    .unwrap();
                black_box(out.len())
            });
        });

        let decode_size = chunk_size / 3 * 4;
        group.bench_function(format!("decode_{}", decode_size), |b| {
            b.iter(|| {
                let mut out = Vec::new();
                Decoder::new(decode_size)
                    .decode_to_writer(Cursor::new(black_box(text.as_bytes())), &mut out)
                    .unwrap();
                black_box(out.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_chunk_sizes);
criterion_main!(benches);
