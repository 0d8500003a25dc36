//! Kernel function table.
//!
//! Every compression the hasher performs goes through a [`Kernel`]. Only the
//! portable kernel exists today; a vectorized or multi-chunk kernel slots in
//! here without touching the tree logic, provided it produces identical words.

use super::{
  BLOCK_LEN, CHUNK_START, PARENT,
  compress::{compress, first_8_words, words16_from_le_bytes_64},
};

pub(crate) type CompressFn = fn(&[u32; 8], &[u32; 16], u64, u32, u32) -> [u32; 16];
pub(crate) type ChunkCompressBlocksFn = fn(&mut [u32; 8], u64, u32, &mut u8, &[u8]);
pub(crate) type ParentCvFn = fn([u32; 8], [u32; 8], [u32; 8], u32) -> [u32; 8];

#[derive(Clone, Copy)]
pub(crate) struct Kernel {
  pub(crate) compress: CompressFn,
  pub(crate) chunk_compress_blocks: ChunkCompressBlocksFn,
  pub(crate) parent_cv: ParentCvFn,
  pub(crate) id: Blake3KernelId,
}

impl core::fmt::Debug for Kernel {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("Kernel").field(&self.id.as_str()).finish()
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Blake3KernelId {
  Portable = 0,
}

impl Blake3KernelId {
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Portable => "portable",
    }
  }
}

#[must_use]
pub(crate) fn kernel(id: Blake3KernelId) -> Kernel {
  match id {
    Blake3KernelId::Portable => Kernel {
      compress,
      chunk_compress_blocks: chunk_compress_blocks_portable,
      parent_cv: parent_cv_portable,
      id,
    },
  }
}

/// Fold whole 64-byte blocks of one chunk into `chaining_value`.
///
/// `CHUNK_START` is applied to the block compressed while
/// `blocks_compressed == 0`. Never called with the chunk's final block, which
/// must stay buffered so it can carry `CHUNK_END`.
#[inline]
fn chunk_compress_blocks_portable(
  chaining_value: &mut [u32; 8],
  chunk_counter: u64,
  flags: u32,
  blocks_compressed: &mut u8,
  blocks: &[u8],
) {
  let (block_slices, remainder) = blocks.as_chunks::<BLOCK_LEN>();
  debug_assert!(remainder.is_empty());
  for block_bytes in block_slices {
    let start = if *blocks_compressed == 0 { CHUNK_START } else { 0 };
    let block_words = words16_from_le_bytes_64(block_bytes);
    *chaining_value = first_8_words(compress(
      chaining_value,
      &block_words,
      chunk_counter,
      BLOCK_LEN as u32,
      flags | start,
    ));
    *blocks_compressed = blocks_compressed.wrapping_add(1);
  }
}

#[inline]
fn parent_cv_portable(left_child_cv: [u32; 8], right_child_cv: [u32; 8], key_words: [u32; 8], flags: u32) -> [u32; 8] {
  let mut block_words = [0u32; 16];
  block_words[..8].copy_from_slice(&left_child_cv);
  block_words[8..].copy_from_slice(&right_child_cv);
  first_8_words(compress(&key_words, &block_words, 0, BLOCK_LEN as u32, PARENT | flags))
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use super::*;
  use crate::crypto::blake3::{IV, output::parent_output};

  #[test]
  fn portable_kernel_reports_its_name() {
    let k = kernel(Blake3KernelId::Portable);
    assert_eq!(k.id.as_str(), "portable");
    assert_eq!(alloc::format!("{k:?}"), "Kernel(\"portable\")");
  }

  #[test]
  fn parent_cv_matches_parent_output_node() {
    let k = kernel(Blake3KernelId::Portable);
    let left = [1u32, 2, 3, 4, 5, 6, 7, 8];
    let right = [9u32, 10, 11, 12, 13, 14, 15, 16];
    assert_eq!(
      (k.parent_cv)(left, right, IV, 0),
      parent_output(k, left, right, IV, 0).chaining_value()
    );
  }

  #[test]
  fn chunk_blocks_mark_only_the_first_block_as_start() {
    let k = kernel(Blake3KernelId::Portable);
    let blocks = [0x5au8; 2 * BLOCK_LEN];

    let mut batched = IV;
    let mut n = 0u8;
    (k.chunk_compress_blocks)(&mut batched, 3, 0, &mut n, &blocks);
    assert_eq!(n, 2);

    let block_words = words16_from_le_bytes_64(&[0x5au8; BLOCK_LEN]);
    let first = first_8_words(compress(&IV, &block_words, 3, BLOCK_LEN as u32, CHUNK_START));
    let second = first_8_words(compress(&first, &block_words, 3, BLOCK_LEN as u32, 0));
    assert_eq!(batched, second);
  }
}
