//! The BLAKE3 compression function.
//!
//! A pure function of its inputs: seven rounds of the `G` quarter-round over a
//! 16-word state, with the message words permuted between rounds.

use super::{BLOCK_LEN, IV};
use crate::util::rotr32;

/// Message word permutation applied between rounds.
///
/// Index `i` of the permuted block takes the word at `MSG_PERMUTATION[i]`.
pub(crate) const MSG_PERMUTATION: [usize; 16] = [2, 6, 3, 10, 7, 0, 4, 13, 1, 11, 12, 5, 9, 14, 15, 8];

const ROUNDS: usize = 7;

#[inline(always)]
fn g(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize, mx: u32, my: u32) {
  state[a] = state[a].wrapping_add(state[b]).wrapping_add(mx);
  state[d] = rotr32(state[d] ^ state[a], 16);
  state[c] = state[c].wrapping_add(state[d]);
  state[b] = rotr32(state[b] ^ state[c], 12);
  state[a] = state[a].wrapping_add(state[b]).wrapping_add(my);
  state[d] = rotr32(state[d] ^ state[a], 8);
  state[c] = state[c].wrapping_add(state[d]);
  state[b] = rotr32(state[b] ^ state[c], 7);
}

#[inline(always)]
fn round(state: &mut [u32; 16], m: &[u32; 16]) {
  // Columns.
  g(state, 0, 4, 8, 12, m[0], m[1]);
  g(state, 1, 5, 9, 13, m[2], m[3]);
  g(state, 2, 6, 10, 14, m[4], m[5]);
  g(state, 3, 7, 11, 15, m[6], m[7]);
  // Diagonals.
  g(state, 0, 5, 10, 15, m[8], m[9]);
  g(state, 1, 6, 11, 12, m[10], m[11]);
  g(state, 2, 7, 8, 13, m[12], m[13]);
  g(state, 3, 4, 9, 14, m[14], m[15]);
}

#[inline(always)]
fn permute(m: &mut [u32; 16]) {
  let mut permuted = [0u32; 16];
  for (slot, &src) in permuted.iter_mut().zip(MSG_PERMUTATION.iter()) {
    *slot = m[src];
  }
  *m = permuted;
}

/// Compress one 64-byte block into a 16-word output.
///
/// The first 8 words are the chaining value of a non-root node. With `ROOT`
/// set in `flags`, all 16 words are one 64-byte block of root output.
#[inline]
#[must_use]
pub(crate) fn compress(
  chaining_value: &[u32; 8],
  block_words: &[u32; 16],
  counter: u64,
  block_len: u32,
  flags: u32,
) -> [u32; 16] {
  debug_assert!(block_len as usize <= BLOCK_LEN);

  let mut state = [
    chaining_value[0],
    chaining_value[1],
    chaining_value[2],
    chaining_value[3],
    chaining_value[4],
    chaining_value[5],
    chaining_value[6],
    chaining_value[7],
    IV[0],
    IV[1],
    IV[2],
    IV[3],
    counter as u32,
    (counter >> 32) as u32,
    block_len,
    flags,
  ];
  let mut block = *block_words;

  for r in 0..ROUNDS {
    round(&mut state, &block);
    // No permutation after the final round.
    if r + 1 != ROUNDS {
      permute(&mut block);
    }
  }

  for i in 0..8 {
    state[i] ^= state[i + 8];
    state[i + 8] ^= chaining_value[i];
  }
  state
}

#[inline(always)]
#[must_use]
pub(crate) fn first_8_words(words: [u32; 16]) -> [u32; 8] {
  [
    words[0], words[1], words[2], words[3], words[4], words[5], words[6], words[7],
  ]
}

/// Decode 32 little-endian bytes into 8 words, independent of host byte order.
#[inline(always)]
#[must_use]
pub(crate) fn words8_from_le_bytes_32(bytes: &[u8; 32]) -> [u32; 8] {
  let mut out = [0u32; 8];
  let (words, _) = bytes.as_chunks::<4>();
  for (word, src) in out.iter_mut().zip(words) {
    *word = u32::from_le_bytes(*src);
  }
  out
}

/// Decode a 64-byte block into 16 little-endian words.
#[inline(always)]
#[must_use]
pub(crate) fn words16_from_le_bytes_64(bytes: &[u8; BLOCK_LEN]) -> [u32; 16] {
  let mut out = [0u32; 16];
  let (words, _) = bytes.as_chunks::<4>();
  for (word, src) in out.iter_mut().zip(words) {
    *word = u32::from_le_bytes(*src);
  }
  out
}

#[inline(always)]
#[must_use]
pub(crate) fn words8_to_le_bytes(words: &[u32; 8]) -> [u8; 32] {
  let mut out = [0u8; 32];
  let (bytes, _) = out.as_chunks_mut::<4>();
  for (dst, word) in bytes.iter_mut().zip(words) {
    *dst = word.to_le_bytes();
  }
  out
}

#[inline(always)]
#[must_use]
pub(crate) fn words16_to_le_bytes(words: &[u32; 16]) -> [u8; BLOCK_LEN] {
  let mut out = [0u8; BLOCK_LEN];
  let (bytes, _) = out.as_chunks_mut::<4>();
  for (dst, word) in bytes.iter_mut().zip(words) {
    *dst = word.to_le_bytes();
  }
  out
}
