//! Keccak hashing and the SHAKE extendable-output functions, built on the
//! Keccak-f\[1600\] permutation and the sponge construction.
//!
//! The fixed-digest functions use the original Keccak padding (domain byte
//! `0x01`), which is what Ethereum calls `keccak256`. They are *not* the NIST
//! SHA3 functions; see [`keccak::FIXED_DIGEST_DOMAIN`].
//!
//! Nothing here is written to be constant time. The working state is wiped
//! after every call, but callers hashing secrets should not rely on this crate
//! to hide timing or cache behaviour.

#![cfg_attr(not(feature = "std"), no_std)]

// to prevent broken links when building documentation in #![no_std] mode
#[cfg(all(not(feature = "std"), doc))]
extern crate std;

pub mod digest;
pub mod error;
pub mod keccak;

#[doc(inline)]
pub use error::Error;

#[doc(inline)]
pub use keccak::{keccak_224, keccak_256, keccak_384, keccak_512, shake128, shake256};
