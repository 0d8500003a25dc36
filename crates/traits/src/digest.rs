//! Cryptographic digest traits.
//!
//! Streaming updates, idempotent finalize, and reset support.

use core::fmt::Debug;

/// Cryptographic hash function producing a fixed-size digest.
///
/// Implementors must make `finalize` non-destructive: calling it twice without
/// an intervening `update` returns the same value, and a later `update`
/// continues the stream as if `finalize` had never been called.
pub trait Digest: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The digest output type.
  ///
  /// Typically `[u8; N]`.
  type Output: Copy + Eq + Debug;

  /// Create a new hasher in its initial state.
  #[must_use]
  fn new() -> Self;

  /// Update the hasher with additional data.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the hasher with `std::io::IoSlice` buffers.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the digest.
  ///
  /// This method does not consume the hasher, allowing further updates if needed.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the digest of data in one shot.
  #[inline]
  #[must_use]
  fn digest(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the digest of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn digest_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }
}

#[cfg(test)]
mod tests {
  use super::Digest;

  #[derive(Clone, Default)]
  struct SumDigest {
    sum: u8,
    len: u8,
  }

  impl Digest for SumDigest {
    const OUTPUT_SIZE: usize = 2;
    type Output = [u8; 2];

    fn new() -> Self {
      Self::default()
    }

    fn update(&mut self, data: &[u8]) {
      self.sum = data.iter().fold(self.sum, |acc, &b| acc.wrapping_add(b));
      self.len = self.len.wrapping_add(data.len() as u8);
    }

    fn finalize(&self) -> Self::Output {
      [self.sum, self.len]
    }

    fn reset(&mut self) {
      *self = Self::default();
    }
  }

  #[test]
  fn vectored_matches_contiguous() {
    assert_eq!(SumDigest::digest_vectored(&[b"ab", b"", b"c"]), SumDigest::digest(b"abc"));
  }

  #[test]
  fn finalize_is_repeatable() {
    let mut h = SumDigest::new();
    h.update(b"xyz");
    assert_eq!(h.finalize(), h.finalize());
  }

  #[cfg(feature = "std")]
  #[test]
  fn io_slices_match_contiguous() {
    let mut h = SumDigest::new();
    h.update_io_slices(&[std::io::IoSlice::new(b"a"), std::io::IoSlice::new(b"bc")]);
    assert_eq!(h.finalize(), SumDigest::digest(b"abc"));
  }
}
