//! BLAKE3 benchmarks.
//!
//! Compares the portable implementation with the official blake3 crate for
//! one-shot hashing, streaming update granularity, and XOF output.

use core::{hint::black_box, time::Duration};

use criterion::{BenchmarkId, Criterion, SamplingMode, Throughput, criterion_group, criterion_main};
use hashes::crypto::Blake3;
use traits::{Digest as _, Xof as _};

mod common;

#[inline]
fn official_hash_bytes(input: &[u8]) -> [u8; 32] {
  *blake3::hash(input).as_bytes()
}

// ─────────────────────────────────────────────────────────────────────────────
// One-shot Comparison Benchmarks
// ─────────────────────────────────────────────────────────────────────────────

fn blake3_oneshot_comparison(c: &mut Criterion) {
  let inputs = common::sized_inputs();
  let mut group = c.benchmark_group("blake3/oneshot");
  group.sample_size(40);
  group.warm_up_time(Duration::from_secs(2));
  group.measurement_time(Duration::from_secs(4));
  group.sampling_mode(SamplingMode::Flat);

  for (len, data) in &inputs {
    common::set_throughput(&mut group, *len);

    group.bench_with_input(BenchmarkId::new("rsb3", len), data, |b, d| {
      b.iter(|| black_box(Blake3::digest(black_box(d))))
    });

    group.bench_with_input(BenchmarkId::new("official", len), data, |b, d| {
      b.iter(|| black_box(official_hash_bytes(black_box(d))))
    });
  }

  group.finish();
}

// ─────────────────────────────────────────────────────────────────────────────
// Streaming Benchmarks
// ─────────────────────────────────────────────────────────────────────────────

fn blake3_streaming(c: &mut Criterion) {
  let data_1mb = common::pseudo_random_bytes(1024 * 1024, 0xB1AE_E3B1_A1E3_0001);
  let data_1mb = black_box(data_1mb);

  let mut group = c.benchmark_group("blake3/streaming");
  group.sample_size(30);
  group.warm_up_time(Duration::from_secs(2));
  group.measurement_time(Duration::from_secs(4));
  group.sampling_mode(SamplingMode::Flat);
  group.throughput(Throughput::Bytes(data_1mb.len() as u64));

  // Update granularity below, at, and above the block and chunk sizes.
  for chunk_size in [1, 64, 100, 1024, 4096, 65536] {
    group.bench_function(format!("rsb3/{chunk_size}B-updates"), |b| {
      b.iter(|| {
        let mut h = Blake3::new();
        for chunk in data_1mb.chunks(chunk_size) {
          h.update(chunk);
        }
        black_box(h.finalize())
      })
    });

    group.bench_function(format!("official/{chunk_size}B-updates"), |b| {
      b.iter(|| {
        let mut h = blake3::Hasher::new();
        for chunk in data_1mb.chunks(chunk_size) {
          h.update(chunk);
        }
        black_box(*h.finalize().as_bytes())
      })
    });
  }

  group.finish();
}

// ─────────────────────────────────────────────────────────────────────────────
// XOF (Extendable Output) Benchmarks
// ─────────────────────────────────────────────────────────────────────────────

fn blake3_xof(c: &mut Criterion) {
  let mut group = c.benchmark_group("blake3/xof");
  group.sample_size(20);
  group.warm_up_time(Duration::from_secs(1));
  group.measurement_time(Duration::from_secs(3));
  group.sampling_mode(SamplingMode::Flat);

  let data = common::pseudo_random_bytes(1024, 0xB1AE_E3B1_A1E3_0003);
  for output_size in [32usize, 1024, 64 * 1024] {
    group.throughput(Throughput::Bytes(output_size as u64));

    // Squeeze-only: the reader is `Clone`, so each iteration restarts at 0.
    group.bench_function(format!("rsb3/{output_size}B-out"), |b| {
      let mut out = vec![0u8; output_size];
      let base = Blake3::xof(&data);
      b.iter(|| {
        let mut xof = base.clone();
        xof.squeeze(&mut out);
        black_box(&out);
      })
    });

    group.bench_function(format!("official/{output_size}B-out"), |b| {
      let mut out = vec![0u8; output_size];
      let mut h = blake3::Hasher::new();
      h.update(&data);
      let base = h.finalize_xof();
      b.iter(|| {
        let mut reader = base.clone();
        reader.fill(&mut out);
        black_box(&out);
      })
    });
  }

  group.finish();
}

criterion_group!(benches, blake3_oneshot_comparison, blake3_streaming, blake3_xof);
criterion_main!(benches);
