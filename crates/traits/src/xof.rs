//! Extendable-output function (XOF) trait.

/// Extendable-output function producing an arbitrary number of bytes.
///
/// Successive calls to [`Xof::squeeze`] continue the same output stream, so
/// squeezing `a` then `b` bytes yields the same bytes as squeezing `a + b` at
/// once.
///
/// This trait intentionally has no `std::io::Read` dependency; it is usable in
/// `no_std` environments.
pub trait Xof: Clone {
  /// Squeeze output bytes into `out`.
  fn squeeze(&mut self, out: &mut [u8]);
}
