//! Chunk accumulator.
//!
//! Absorbs up to [`CHUNK_LEN`] bytes into 64-byte blocks, folding each block
//! into the running chaining value once it is known not to be the chunk's
//! last block.

use core::cmp::min;

use super::{
  BLOCK_LEN, CHUNK_END, CHUNK_LEN, CHUNK_START, compress::words16_from_le_bytes_64, kernels::Kernel,
  output::OutputNode,
};

#[derive(Clone, Copy, Debug)]
pub(crate) struct ChunkState {
  pub(crate) kernel: Kernel,
  chaining_value: [u32; 8],
  pub(crate) chunk_counter: u64,
  block: [u8; BLOCK_LEN],
  block_len: u8,
  blocks_compressed: u8,
  flags: u32,
}

impl ChunkState {
  #[inline]
  pub(crate) fn new(key_words: [u32; 8], chunk_counter: u64, flags: u32, kernel: Kernel) -> Self {
    Self {
      kernel,
      chaining_value: key_words,
      chunk_counter,
      block: [0u8; BLOCK_LEN],
      block_len: 0,
      blocks_compressed: 0,
      flags,
    }
  }

  /// Bytes absorbed into this chunk so far.
  #[inline]
  pub(crate) fn len(&self) -> usize {
    BLOCK_LEN * self.blocks_compressed as usize + self.block_len as usize
  }

  #[inline]
  fn start_flag(&self) -> u32 {
    if self.blocks_compressed == 0 { CHUNK_START } else { 0 }
  }

  /// Absorb `input`. The caller keeps `self.len() + input.len() <= CHUNK_LEN`.
  pub(crate) fn update(&mut self, mut input: &[u8]) {
    debug_assert!(self.len() + input.len() <= CHUNK_LEN);

    // Phase 1: top up a buffered block. A full buffer is compressed only once
    // more input is known to follow it, since the chunk's last block must
    // stay buffered for `output()`.
    if self.block_len != 0 {
      let want = BLOCK_LEN - self.block_len as usize;
      let take = min(want, input.len());
      self.block[self.block_len as usize..][..take].copy_from_slice(&input[..take]);
      self.block_len = self.block_len.wrapping_add(take as u8);
      input = &input[take..];

      if input.is_empty() {
        return;
      }

      debug_assert_eq!(self.block_len as usize, BLOCK_LEN);
      (self.kernel.chunk_compress_blocks)(
        &mut self.chaining_value,
        self.chunk_counter,
        self.flags,
        &mut self.blocks_compressed,
        &self.block,
      );
      self.block_len = 0;
    }

    if input.is_empty() {
      return;
    }

    // Phase 2: block-aligned. Compress every whole block straight from the
    // caller slice except the last one, which is buffered (1..=64 bytes).
    let tail = (input.len() - 1) % BLOCK_LEN + 1;
    let (blocks, last) = input.split_at(input.len() - tail);
    if !blocks.is_empty() {
      (self.kernel.chunk_compress_blocks)(
        &mut self.chaining_value,
        self.chunk_counter,
        self.flags,
        &mut self.blocks_compressed,
        blocks,
      );
    }
    self.block[..tail].copy_from_slice(last);
    self.block_len = tail as u8;
  }

  /// Snapshot the chunk as a pending node. Does not mutate the accumulator.
  #[inline]
  #[must_use]
  pub(crate) fn output(&self) -> OutputNode {
    let mut block = self.block;
    block[self.block_len as usize..].fill(0);
    OutputNode {
      kernel: self.kernel,
      input_chaining_value: self.chaining_value,
      block_words: words16_from_le_bytes_64(&block),
      counter: self.chunk_counter,
      block_len: self.block_len as u32,
      flags: self.flags | self.start_flag() | CHUNK_END,
    }
  }
}
