//! Pending output nodes and the extendable-output reader.

use core::cmp::min;

use traits::Xof;

use super::{
  BLOCK_LEN, OUT_LEN, OUTPUT_BLOCK_LEN, PARENT, ROOT,
  compress::{first_8_words, words8_to_le_bytes, words16_to_le_bytes},
  kernels::Kernel,
};

/// Everything needed for one more compression of a tree node.
///
/// Produced by a finished chunk or by a parent merge and never mutated.
/// `ROOT` is never stored in `flags`; it is applied only while extracting
/// root output.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OutputNode {
  pub(crate) kernel: Kernel,
  pub(crate) input_chaining_value: [u32; 8],
  pub(crate) block_words: [u32; 16],
  pub(crate) counter: u64,
  pub(crate) block_len: u32,
  pub(crate) flags: u32,
}

impl OutputNode {
  /// The node's chaining value, used by its parent.
  #[inline]
  #[must_use]
  pub(crate) fn chaining_value(&self) -> [u32; 8] {
    first_8_words((self.kernel.compress)(
      &self.input_chaining_value,
      &self.block_words,
      self.counter,
      self.block_len,
      self.flags,
    ))
  }

  /// Root output block `output_block_counter` (64 bytes).
  #[inline]
  #[must_use]
  fn root_output_block(&self, output_block_counter: u64) -> [u8; OUTPUT_BLOCK_LEN] {
    words16_to_le_bytes(&(self.kernel.compress)(
      &self.input_chaining_value,
      &self.block_words,
      output_block_counter,
      self.block_len,
      self.flags | ROOT,
    ))
  }

  #[inline]
  #[must_use]
  pub(crate) fn root_hash_bytes(&self) -> [u8; OUT_LEN] {
    words8_to_le_bytes(&first_8_words((self.kernel.compress)(
      &self.input_chaining_value,
      &self.block_words,
      0,
      self.block_len,
      self.flags | ROOT,
    )))
  }

  /// Fill `out` with root output starting at output block `output_block_counter`.
  pub(crate) fn root_output_bytes_into(&self, mut output_block_counter: u64, out: &mut [u8]) {
    for dst in out.chunks_mut(OUTPUT_BLOCK_LEN) {
      let block = self.root_output_block(output_block_counter);
      dst.copy_from_slice(&block[..dst.len()]);
      output_block_counter = output_block_counter.wrapping_add(1);
    }
  }
}

/// Build the pending node for a parent of two child chaining values.
#[inline]
#[must_use]
pub(crate) fn parent_output(
  kernel: Kernel,
  left_child_cv: [u32; 8],
  right_child_cv: [u32; 8],
  key_words: [u32; 8],
  flags: u32,
) -> OutputNode {
  let mut block_words = [0u32; 16];
  block_words[..8].copy_from_slice(&left_child_cv);
  block_words[8..].copy_from_slice(&right_child_cv);
  OutputNode {
    kernel,
    input_chaining_value: key_words,
    block_words,
    counter: 0,
    block_len: BLOCK_LEN as u32,
    flags: PARENT | flags,
  }
}

/// Extendable output reader over a finalized BLAKE3 root.
///
/// Reading is deterministic and unbounded: every request of `n` bytes is a
/// prefix of a longer request from the same root. The reader may be cloned to
/// fork the stream or repositioned with [`Blake3Xof::set_position`].
#[derive(Clone, Debug)]
pub struct Blake3Xof {
  output: OutputNode,
  block_counter: u64,
  buf: [u8; OUTPUT_BLOCK_LEN],
  buf_pos: usize,
}

impl Blake3Xof {
  #[inline]
  pub(crate) fn new(output: OutputNode) -> Self {
    Self {
      output,
      block_counter: 0,
      buf: [0u8; OUTPUT_BLOCK_LEN],
      buf_pos: OUTPUT_BLOCK_LEN,
    }
  }

  #[inline]
  fn refill(&mut self) {
    self.buf = self.output.root_output_block(self.block_counter);
    self.block_counter = self.block_counter.wrapping_add(1);
    self.buf_pos = 0;
  }

  /// Byte offset of the next byte [`Xof::squeeze`] will produce.
  #[inline]
  #[must_use]
  pub fn position(&self) -> u64 {
    let buffered = (OUTPUT_BLOCK_LEN - self.buf_pos) as u64;
    self
      .block_counter
      .wrapping_mul(OUTPUT_BLOCK_LEN as u64)
      .wrapping_sub(buffered)
  }

  /// Seek to byte offset `position` in the output stream.
  pub fn set_position(&mut self, position: u64) {
    let block = position / OUTPUT_BLOCK_LEN as u64;
    let offset = (position % OUTPUT_BLOCK_LEN as u64) as usize;
    self.block_counter = block;
    self.buf_pos = OUTPUT_BLOCK_LEN;
    if offset != 0 {
      self.refill();
      self.buf_pos = offset;
    }
  }
}

impl Xof for Blake3Xof {
  fn squeeze(&mut self, mut out: &mut [u8]) {
    if out.is_empty() {
      return;
    }

    // Drain any buffered bytes first.
    if self.buf_pos != self.buf.len() {
      let take = min(self.buf.len() - self.buf_pos, out.len());
      out[..take].copy_from_slice(&self.buf[self.buf_pos..self.buf_pos + take]);
      self.buf_pos += take;
      out = &mut out[take..];
      if out.is_empty() {
        return;
      }
    }

    // Whole output blocks go straight into the caller buffer.
    let full = out.len() / OUTPUT_BLOCK_LEN * OUTPUT_BLOCK_LEN;
    if full != 0 {
      let blocks = (full / OUTPUT_BLOCK_LEN) as u64;
      self.output.root_output_bytes_into(self.block_counter, &mut out[..full]);
      self.block_counter = self.block_counter.wrapping_add(blocks);
      out = &mut out[full..];
    }

    // Tail: refill once and copy the remaining bytes.
    if !out.is_empty() {
      self.refill();
      let take = out.len();
      out.copy_from_slice(&self.buf[..take]);
      self.buf_pos = take;
    }
  }
}

#[cfg(feature = "std")]
impl std::io::Read for Blake3Xof {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    self.squeeze(buf);
    Ok(buf.len())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::crypto::blake3::{
    CHUNK_END, CHUNK_START, IV,
    kernels::{Blake3KernelId, kernel},
  };

  fn empty_root() -> OutputNode {
    OutputNode {
      kernel: kernel(Blake3KernelId::Portable),
      input_chaining_value: IV,
      block_words: [0u32; 16],
      counter: 0,
      block_len: 0,
      flags: CHUNK_START | CHUNK_END,
    }
  }

  #[test]
  fn root_hash_is_first_32_bytes_of_output() {
    let node = empty_root();
    let mut out = [0u8; 100];
    node.root_output_bytes_into(0, &mut out);
    assert_eq!(&out[..OUT_LEN], &node.root_hash_bytes());
  }

  #[test]
  fn root_flag_is_not_persisted() {
    let node = empty_root();
    let _ = node.root_hash_bytes();
    assert_eq!(node.flags & ROOT, 0);
    assert_ne!(&words8_to_le_bytes(&node.chaining_value()), &node.root_hash_bytes());
  }

  #[test]
  fn split_squeezes_match_one_squeeze() {
    let mut whole = [0u8; 300];
    Blake3Xof::new(empty_root()).squeeze(&mut whole);

    for split in [0usize, 1, 63, 64, 65, 128, 200, 300] {
      let mut xof = Blake3Xof::new(empty_root());
      let mut parts = [0u8; 300];
      let (a, b) = parts.split_at_mut(split);
      xof.squeeze(a);
      xof.squeeze(b);
      assert_eq!(parts, whole, "split at {split}");
    }
  }

  #[test]
  fn position_tracks_squeezed_bytes() {
    let mut xof = Blake3Xof::new(empty_root());
    assert_eq!(xof.position(), 0);
    let mut buf = [0u8; 70];
    xof.squeeze(&mut buf[..10]);
    assert_eq!(xof.position(), 10);
    xof.squeeze(&mut buf);
    assert_eq!(xof.position(), 80);
    xof.squeeze(&mut buf[..48]);
    assert_eq!(xof.position(), 128);
  }

  #[test]
  fn set_position_seeks_within_stream() {
    let mut whole = [0u8; 256];
    Blake3Xof::new(empty_root()).squeeze(&mut whole);

    for pos in [0u64, 1, 63, 64, 100, 192, 255] {
      let mut xof = Blake3Xof::new(empty_root());
      xof.set_position(pos);
      assert_eq!(xof.position(), pos);
      let mut tail = [0u8; 256];
      let n = 256 - pos as usize;
      xof.squeeze(&mut tail[..n]);
      assert_eq!(&tail[..n], &whole[pos as usize..], "seek to {pos}");
    }
  }

  #[test]
  fn parent_node_carries_children_and_parent_flag() {
    let k = kernel(Blake3KernelId::Portable);
    let left = [1u32; 8];
    let right = [2u32; 8];
    let node = parent_output(k, left, right, IV, 0);
    assert_eq!(&node.block_words[..8], &left);
    assert_eq!(&node.block_words[8..], &right);
    assert_eq!(node.counter, 0);
    assert_eq!(node.block_len, BLOCK_LEN as u32);
    assert_eq!(node.flags, PARENT);
  }
}
