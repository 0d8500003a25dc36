//! Portable BLAKE3 tree hashing.
//!
//! This crate is `no_std` compatible. Its only optional library dependency is
//! `log` (feature `log`); dev-only dependencies are used for oracle testing and
//! benchmarking.
//!
//! # Modules
//!
//! - [`crypto`] - Cryptographic hash functions.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `std::io::Write` for hashers, `std::io::Read` for XOF readers |
//! | `alloc` | Yes | `finalize_vec` (implied by `std`) |
//! | `log` | No | `log::trace!` records for chunk boundaries and finalization |
//! | `diag` | No | Tree state inspection via `Blake3::tree_diag` |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod crypto;

mod util;

pub use traits::{Digest, InvalidKeyLength, KeyedDigest, Xof};
