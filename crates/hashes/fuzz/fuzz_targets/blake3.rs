#![no_main]

use hashes::crypto::Blake3;
use libfuzzer_sys::fuzz_target;
use traits::{Digest as _, Xof as _};

fn parse_u16_le(input: &[u8]) -> u16 {
  match input.len() {
    0 => 0,
    1 => input[0] as u16,
    _ => u16::from_le_bytes([input[0], input[1]]),
  }
}

fuzz_target!(|data: &[u8]| {
  let ours = Blake3::digest(data);
  let expected = *blake3::hash(data).as_bytes();
  assert_eq!(ours, expected);

  // Keyed hash mode, with the key taken from the input itself.
  {
    let key_bytes = data.get(..32).unwrap_or(data);
    let mut key = [0u8; 32];
    key[..key_bytes.len()].copy_from_slice(key_bytes);

    let ours = Blake3::keyed_digest(&key, data);
    let expected = *blake3::keyed_hash(&key, data).as_bytes();
    assert_eq!(ours, expected);

    // Untyped keys are accepted iff they are exactly 32 bytes.
    assert_eq!(Blake3::new_keyed_from_slice(key_bytes).is_ok(), key_bytes.len() == 32);
  }

  // XOF against the official crate, with multi-squeeze.
  let out_len = (parse_u16_le(data) as usize) % 2049;
  let split = if out_len == 0 {
    0usize
  } else {
    data.get(2).copied().unwrap_or(0) as usize % (out_len + 1)
  };

  let mut ours_xof = vec![0u8; out_len];
  {
    let mut h = Blake3::new();
    h.update(data);
    let mut reader = h.finalize_xof();
    reader.squeeze(&mut ours_xof[..split]);
    reader.squeeze(&mut ours_xof[split..]);
  }

  let mut expected_xof = vec![0u8; out_len];
  {
    let mut hasher = blake3::Hasher::new();
    hasher.update(data);
    let mut out = hasher.finalize_xof();
    out.fill(&mut expected_xof[..split]);
    out.fill(&mut expected_xof[split..]);
  }
  assert_eq!(ours_xof, expected_xof);
});
