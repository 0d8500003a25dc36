use core::hint::black_box;

use criterion::{BenchmarkGroup, Throughput, measurement::WallTime};

/// splitmix64: deterministic, non-cryptographic filler for benchmark inputs.
#[inline]
fn splitmix64(state: &mut u64) -> u64 {
  *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
  let mut z = *state;
  z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
  z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
  z ^ (z >> 31)
}

pub fn pseudo_random_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut state = seed ^ len as u64;
  let mut out = Vec::with_capacity(len + 8);
  while out.len() < len {
    out.extend_from_slice(&splitmix64(&mut state).to_le_bytes());
  }
  out.truncate(len);
  black_box(&out);
  out
}

/// Input sizes around the block (64 B) and chunk (1 KiB) boundaries, plus a
/// few multi-chunk trees.
pub fn sized_inputs() -> Vec<(usize, Vec<u8>)> {
  [0usize, 1, 63, 64, 65, 1023, 1024, 1025, 2048, 8 * 1024, 64 * 1024, 1024 * 1024]
    .into_iter()
    .map(|len| (len, pseudo_random_bytes(len, 0xD1CE_B00C_D15C_0FFE)))
    .collect()
}

pub fn set_throughput(group: &mut BenchmarkGroup<'_, WallTime>, len: usize) {
  if len == 0 {
    group.throughput(Throughput::Elements(1));
  } else {
    group.throughput(Throughput::Bytes(len as u64));
  }
}
