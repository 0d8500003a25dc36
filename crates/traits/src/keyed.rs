//! Keyed digest construction.

use crate::{Digest, InvalidKeyLength};

/// A [`Digest`] that can be initialized from secret key material.
///
/// Key material arrives as an untyped slice (from configuration, the wire,
/// a KDF) and is validated before any hasher state changes.
pub trait KeyedDigest: Digest {
  /// Exact key size in bytes.
  const KEY_SIZE: usize;

  /// Construct a keyed hasher, failing if `key` is not exactly
  /// [`Self::KEY_SIZE`] bytes.
  fn new_keyed_from_slice(key: &[u8]) -> Result<Self, InvalidKeyLength>;

  /// Replace the key and reset the hasher.
  ///
  /// On error the hasher is left untouched.
  fn rekey(&mut self, key: &[u8]) -> Result<(), InvalidKeyLength> {
    *self = Self::new_keyed_from_slice(key)?;
    Ok(())
  }
}
