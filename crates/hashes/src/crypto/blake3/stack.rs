//! Subtree-merge stack.
//!
//! Holds the chaining values of completed subtrees that still wait for a right
//! sibling. Merging mirrors a binary counter increment: after chunk `n`
//! completes, one merge happens per trailing zero bit of `n`, so the occupied
//! depth always equals the number of set bits in the completed-chunk count.

use super::kernels::Kernel;

/// Maximum tree depth: 2^64 input bytes / 1024-byte chunks = 2^54 leaves.
pub(crate) const MAX_DEPTH: usize = 54;

#[derive(Clone, Copy, Debug)]
pub(crate) struct CvStack {
  entries: [[u32; 8]; MAX_DEPTH],
  len: u8,
}

impl CvStack {
  #[inline]
  pub(crate) const fn new() -> Self {
    Self {
      entries: [[0u32; 8]; MAX_DEPTH],
      len: 0,
    }
  }

  #[inline]
  pub(crate) fn len(&self) -> usize {
    self.len as usize
  }

  /// Forget every entry. Slots past `len` are never read, so their contents
  /// need no clearing.
  #[inline]
  pub(crate) fn clear(&mut self) {
    self.len = 0;
  }

  #[inline]
  fn push(&mut self, cv: [u32; 8]) {
    debug_assert!(self.len() < MAX_DEPTH, "cv stack overflow");
    self.entries[self.len()] = cv;
    self.len = self.len.wrapping_add(1);
  }

  #[inline]
  fn pop(&mut self) -> [u32; 8] {
    debug_assert!(self.len != 0, "cv stack underflow");
    self.len = self.len.wrapping_sub(1);
    self.entries[self.len()]
  }

  /// Entries from the top of the stack down to the bottom.
  #[inline]
  pub(crate) fn iter_from_top(&self) -> impl Iterator<Item = &[u32; 8]> {
    self.entries[..self.len()].iter().rev()
  }

  /// Add the chaining value of a just-completed chunk, where `total_chunks`
  /// counts completed chunks including this one. Returns the number of parent
  /// merges performed.
  pub(crate) fn add_chunk_chaining_value(
    &mut self,
    kernel: Kernel,
    mut new_cv: [u32; 8],
    mut total_chunks: u64,
    key_words: [u32; 8],
    flags: u32,
  ) -> u32 {
    debug_assert!(total_chunks != 0);
    let mut merges = 0;
    while total_chunks & 1 == 0 {
      new_cv = (kernel.parent_cv)(self.pop(), new_cv, key_words, flags);
      total_chunks >>= 1;
      merges += 1;
    }
    self.push(new_cv);
    merges
  }
}
