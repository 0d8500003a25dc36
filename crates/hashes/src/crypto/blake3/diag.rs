//! Optional diagnostics for the hash tree state.
//!
//! This module is behind `cfg(feature = "diag")` and is intended for
//! explainable/debuggable streaming state without affecting normal builds.

use super::Blake3KernelId;

/// Snapshot of a [`super::Blake3`] hasher's tree state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeDiag {
  /// Kernel performing compressions.
  pub kernel: Blake3KernelId,
  /// Total bytes absorbed since construction or the last reset.
  pub bytes_hashed: u64,
  /// Chunks folded into the merge stack (the active chunk is not counted).
  pub chunks_completed: u64,
  /// Bytes buffered in the active chunk (`0..=1024`).
  pub chunk_len: usize,
  /// Subtree chaining values waiting on the merge stack.
  ///
  /// Always `chunks_completed.count_ones()`.
  pub stack_depth: usize,
  /// Whether the hasher runs in keyed mode.
  pub keyed: bool,
}
