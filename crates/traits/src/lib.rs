//! Core traits for rsb3.
//!
//! This crate provides the traits the BLAKE3 implementation conforms to. It is
//! `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`Digest`] | Streaming hash with a fixed-size default output |
//! | [`KeyedDigest`] | Digest constructed from a caller-supplied secret key |
//! | [`Xof`] | Extendable-output reader |
//!
//! # Error Types
//!
//! - [`InvalidKeyLength`] - Key material of the wrong size was supplied
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod digest;
pub mod error;
mod keyed;
mod xof;

pub use digest::Digest;
pub use error::InvalidKeyLength;
pub use keyed::KeyedDigest;
pub use xof::Xof;
