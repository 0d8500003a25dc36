//! BLAKE3 (hash, keyed hash, XOF).
//!
//! Input is split into 1024-byte chunks, each compressed block by block into a
//! chaining value. Chunk chaining values are merged bottom-up into a binary
//! tree whose root, compressed with `ROOT`, yields the output stream.
//!
//! This is a portable, dependency-free implementation suitable for `no_std`.
//!
//! # Examples
//!
//! ```
//! use hashes::{Digest, crypto::Blake3};
//!
//! let mut h = Blake3::new();
//! h.update(b"hello ");
//! h.update(b"world");
//! assert_eq!(h.finalize(), Blake3::digest(b"hello world"));
//! ```

#![allow(clippy::indexing_slicing)] // Fixed-size arrays + internal block parsing

use core::cmp::min;

use traits::{Digest, InvalidKeyLength, KeyedDigest, Xof};

mod chunk;
mod compress;
#[cfg(feature = "diag")]
mod diag;
pub(crate) mod kernels;
mod output;
mod stack;

use self::{
  chunk::ChunkState,
  compress::words8_from_le_bytes_32,
  kernels::Kernel,
  output::{OutputNode, parent_output},
  stack::CvStack,
};
#[cfg(feature = "diag")]
pub use self::diag::TreeDiag;
pub use self::{kernels::Blake3KernelId, output::Blake3Xof};
use crate::util::trace;

/// Default digest length in bytes.
pub const OUT_LEN: usize = 32;
/// Key length in bytes for keyed hashing.
pub const KEY_LEN: usize = 32;
const BLOCK_LEN: usize = 64;
const CHUNK_LEN: usize = 1024;
const OUTPUT_BLOCK_LEN: usize = 2 * OUT_LEN;

const CHUNK_START: u32 = 1 << 0;
const CHUNK_END: u32 = 1 << 1;
const PARENT: u32 = 1 << 2;
const ROOT: u32 = 1 << 3;
const KEYED_HASH: u32 = 1 << 4;
// Key derivation is not implemented; the flag values are reserved.
#[allow(dead_code)]
const DERIVE_KEY_CONTEXT: u32 = 1 << 5;
#[allow(dead_code)]
const DERIVE_KEY_MATERIAL: u32 = 1 << 6;

const IV: [u32; 8] = [
  0x6A09_E667,
  0xBB67_AE85,
  0x3C6E_F372,
  0xA54F_F53A,
  0x510E_527F,
  0x9B05_688C,
  0x1F83_D9AB,
  0x5BE0_CD19,
];

/// Streaming BLAKE3 hasher.
///
/// Owns the active chunk accumulator and the subtree-merge stack. Finalizing
/// borrows the hasher immutably: it can be repeated, and further updates
/// extend the same stream.
#[derive(Clone)]
pub struct Blake3 {
  kernel: Kernel,
  chunk_state: ChunkState,
  key_words: [u32; 8],
  cv_stack: CvStack,
  flags: u32,
}

impl Default for Blake3 {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl core::fmt::Debug for Blake3 {
  // Key words are deliberately omitted.
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Blake3")
      .field("kernel", &self.kernel.id)
      .field("keyed", &(self.flags & KEYED_HASH != 0))
      .field("count", &self.count())
      .field("stack_depth", &self.cv_stack.len())
      .finish_non_exhaustive()
  }
}

impl Blake3 {
  /// Compute the hash of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn digest(data: &[u8]) -> [u8; OUT_LEN] {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the XOF output state of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn xof(data: &[u8]) -> Blake3Xof {
    let mut h = Self::new();
    h.update(data);
    h.finalize_xof()
  }

  /// Compute the keyed hash of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn keyed_digest(key: &[u8; KEY_LEN], data: &[u8]) -> [u8; OUT_LEN] {
    let mut h = Self::new_keyed(key);
    h.update(data);
    h.finalize()
  }

  /// Compute the keyed XOF output state of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn keyed_xof(key: &[u8; KEY_LEN], data: &[u8]) -> Blake3Xof {
    let mut h = Self::new_keyed(key);
    h.update(data);
    h.finalize_xof()
  }

  #[inline]
  fn new_internal(key_words: [u32; 8], flags: u32) -> Self {
    let kernel = kernels::kernel(Blake3KernelId::Portable);
    Self {
      kernel,
      chunk_state: ChunkState::new(key_words, 0, flags, kernel),
      key_words,
      cv_stack: CvStack::new(),
      flags,
    }
  }

  /// Construct a new hasher for the keyed hash function.
  #[must_use]
  #[inline]
  pub fn new_keyed(key: &[u8; KEY_LEN]) -> Self {
    Self::new_internal(words8_from_le_bytes_32(key), KEYED_HASH)
  }

  /// Construct a keyed hasher from untyped key material.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidKeyLength`] unless `key` is exactly [`KEY_LEN`] bytes.
  #[inline]
  pub fn new_keyed_from_slice(key: &[u8]) -> Result<Self, InvalidKeyLength> {
    let key: &[u8; KEY_LEN] = key.try_into().map_err(|_| InvalidKeyLength::new(KEY_LEN, key.len()))?;
    Ok(Self::new_keyed(key))
  }

  /// Construct an unkeyed (`None`) or keyed (`Some(key)`) hasher.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidKeyLength`] if a key is given and is not exactly
  /// [`KEY_LEN`] bytes.
  #[inline]
  pub fn with_key(key: Option<&[u8]>) -> Result<Self, InvalidKeyLength> {
    match key {
      Some(key) => Self::new_keyed_from_slice(key),
      None => Ok(Self::new()),
    }
  }

  /// Replace the key and reset the hasher to an empty keyed stream.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidKeyLength`] unless `key` is exactly [`KEY_LEN`] bytes;
  /// the hasher is left untouched in that case.
  #[inline]
  pub fn rekey(&mut self, key: &[u8]) -> Result<(), InvalidKeyLength> {
    *self = Self::new_keyed_from_slice(key)?;
    trace!("rekeyed");
    Ok(())
  }

  /// Total number of bytes absorbed since construction or the last reset.
  #[inline]
  #[must_use]
  pub fn count(&self) -> u64 {
    self
      .chunk_state
      .chunk_counter
      .wrapping_mul(CHUNK_LEN as u64)
      .wrapping_add(self.chunk_state.len() as u64)
  }

  fn update_inner(&mut self, mut input: &[u8]) {
    while !input.is_empty() {
      // A full chunk is committed only once more input proves it is not the
      // last one; the final chunk must reach `root_output` as a leaf.
      if self.chunk_state.len() == CHUNK_LEN {
        let chunk_cv = self.chunk_state.output().chaining_value();
        let total_chunks = self.chunk_state.chunk_counter + 1;
        let merges =
          self
            .cv_stack
            .add_chunk_chaining_value(self.kernel, chunk_cv, total_chunks, self.key_words, self.flags);
        trace!(
          "chunk {} complete: {} merges, stack depth {}",
          total_chunks - 1,
          merges,
          self.cv_stack.len()
        );
        self.chunk_state = ChunkState::new(self.key_words, total_chunks, self.flags, self.kernel);
      }

      let want = CHUNK_LEN - self.chunk_state.len();
      let take = min(want, input.len());
      self.chunk_state.update(&input[..take]);
      input = &input[take..];
    }
  }

  /// Collapse the merge stack onto the active chunk, yielding the root node.
  fn root_output(&self) -> OutputNode {
    let mut output = self.chunk_state.output();
    for &left in self.cv_stack.iter_from_top() {
      output = parent_output(self.kernel, left, output.chaining_value(), self.key_words, self.flags);
    }
    trace!(
      "finalize: {} bytes, {} parent nodes folded",
      self.count(),
      self.cv_stack.len()
    );
    output
  }

  /// Finalize into an extendable output state (XOF).
  #[must_use]
  #[inline]
  pub fn finalize_xof(&self) -> Blake3Xof {
    Blake3Xof::new(self.root_output())
  }

  /// Fill `out` with the first `out.len()` bytes of output.
  ///
  /// The first 32 bytes equal [`Digest::finalize`]; an empty `out` is a no-op.
  #[inline]
  pub fn finalize_into(&self, out: &mut [u8]) {
    if out.is_empty() {
      return;
    }
    self.finalize_xof().squeeze(out);
  }

  /// Return `out_len` bytes of output.
  #[cfg(feature = "alloc")]
  #[must_use]
  pub fn finalize_vec(&self, out_len: usize) -> alloc::vec::Vec<u8> {
    let mut out = alloc::vec![0u8; out_len];
    self.finalize_into(&mut out);
    out
  }

  /// Inspect the streaming tree state.
  #[cfg(feature = "diag")]
  #[must_use]
  pub fn tree_diag(&self) -> TreeDiag {
    TreeDiag {
      kernel: self.kernel.id,
      bytes_hashed: self.count(),
      chunks_completed: self.chunk_state.chunk_counter,
      chunk_len: self.chunk_state.len(),
      stack_depth: self.cv_stack.len(),
      keyed: self.flags & KEYED_HASH != 0,
    }
  }
}

impl Digest for Blake3 {
  const OUTPUT_SIZE: usize = OUT_LEN;
  type Output = [u8; OUT_LEN];

  #[inline]
  fn new() -> Self {
    Self::new_internal(IV, 0)
  }

  #[inline]
  fn update(&mut self, input: &[u8]) {
    self.update_inner(input);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    self.root_output().root_hash_bytes()
  }

  #[inline]
  fn reset(&mut self) {
    self.chunk_state = ChunkState::new(self.key_words, 0, self.flags, self.kernel);
    self.cv_stack.clear();
    trace!("reset");
  }
}

impl KeyedDigest for Blake3 {
  const KEY_SIZE: usize = KEY_LEN;

  #[inline]
  fn new_keyed_from_slice(key: &[u8]) -> Result<Self, InvalidKeyLength> {
    Blake3::new_keyed_from_slice(key)
  }

  #[inline]
  fn rekey(&mut self, key: &[u8]) -> Result<(), InvalidKeyLength> {
    Blake3::rekey(self, key)
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Blake3 {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.update_inner(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}
