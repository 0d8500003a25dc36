#![no_main]

use hashes::crypto::Blake3;
use libfuzzer_sys::fuzz_target;
use traits::Digest as _;

// The first byte seeds the update split sizes; the rest is the message.
fuzz_target!(|data: &[u8]| {
  let Some((&seed, msg)) = data.split_first() else {
    return;
  };

  let mut h = Blake3::new();
  let mut rest = msg;
  let mut step = seed as usize + 1;
  while !rest.is_empty() {
    let take = step.min(rest.len());
    h.update(&rest[..take]);
    rest = &rest[take..];
    step = step.wrapping_mul(37).wrapping_add(11) % 2053 + 1;
  }

  assert_eq!(h.count(), msg.len() as u64);
  assert_eq!(h.finalize(), Blake3::digest(msg));
  assert_eq!(h.finalize(), *blake3::hash(msg).as_bytes());

  h.reset();
  h.update(msg);
  assert_eq!(h.finalize(), Blake3::digest(msg));
});
