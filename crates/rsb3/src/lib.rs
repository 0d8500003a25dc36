//! Portable BLAKE3 tree hashing.
//!
//! `rsb3` provides a streaming BLAKE3 hasher with keyed hashing and
//! extendable output. Zero library dependencies by default, `no_std`
//! compatible.
//!
//! # Quick Start
//!
//! ```
//! use rsb3::{Blake3, Digest, Xof};
//!
//! // One-shot computation
//! let digest = Blake3::digest(b"hello world");
//!
//! // Streaming computation
//! let mut hasher = Blake3::new();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! assert_eq!(hasher.finalize(), digest);
//!
//! // Extendable output: any length, always a prefix of longer output
//! let mut long = [0u8; 100];
//! hasher.finalize_xof().squeeze(&mut long);
//! assert_eq!(long[..32], digest);
//! ```
//!
//! # Keyed Hashing
//!
//! ```
//! use rsb3::{Blake3, Digest, InvalidKeyLength};
//!
//! let mut mac = Blake3::new_keyed_from_slice(&[7u8; 32])?;
//! mac.update(b"message");
//! assert_eq!(mac.finalize(), Blake3::keyed_digest(&[7u8; 32], b"message"));
//!
//! assert!(Blake3::new_keyed_from_slice(&[7u8; 31]).is_err());
//! # Ok::<(), InvalidKeyLength>(())
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `std::io` adapters (implies `alloc`) |
//! | `alloc` | Yes | `Blake3::finalize_vec` |
//! | `log` | No | `log::trace!` records from the hasher |
//! | `diag` | No | `Blake3::tree_diag` state inspection |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! rsb3 = { version = "0.1", default-features = false }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "diag")]
pub use hashes::crypto::blake3::TreeDiag;
pub use hashes::crypto::{
  Blake3, Blake3Xof,
  blake3::{Blake3KernelId, KEY_LEN, OUT_LEN},
};
pub use traits::{Digest, InvalidKeyLength, KeyedDigest, Xof};
