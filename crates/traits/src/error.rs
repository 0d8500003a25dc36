//! Error types for hash construction.
//!
//! Individual crates may define additional errors as needed.

use core::fmt;

/// Key material has the wrong length.
///
/// Returned when a keyed hasher is constructed (or re-keyed) from a slice
/// whose length differs from the algorithm's key size.
///
/// # Examples
///
/// ```
/// use traits::InvalidKeyLength;
///
/// fn parse_key(key: &[u8]) -> Result<[u8; 32], InvalidKeyLength> {
///   key.try_into().map_err(|_| InvalidKeyLength::new(32, key.len()))
/// }
///
/// assert!(parse_key(&[0u8; 32]).is_ok());
/// let err = parse_key(&[0u8; 31]).unwrap_err();
/// assert_eq!(err.actual(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct InvalidKeyLength {
  expected: usize,
  actual: usize,
}

impl InvalidKeyLength {
  /// Create a new key length error.
  #[inline]
  #[must_use]
  pub const fn new(expected: usize, actual: usize) -> Self {
    Self { expected, actual }
  }

  /// The key length the algorithm requires.
  #[inline]
  #[must_use]
  pub const fn expected(&self) -> usize {
    self.expected
  }

  /// The key length that was supplied.
  #[inline]
  #[must_use]
  pub const fn actual(&self) -> usize {
    self.actual
  }
}

impl fmt::Display for InvalidKeyLength {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "invalid key length: expected {} bytes, got {}",
      self.expected, self.actual
    )
  }
}

impl core::error::Error for InvalidKeyLength {}
