//! Whole-digest helpers that return arrays instead of filling buffers.
//!
//! ```
//! let hash = libkeccak::digest::keccak_256(b"hello world");
//! assert_eq!(hash[.. 4], [0x47, 0x17, 0x32, 0x85]);
//! ```

use crate::keccak::{Variant, KECCAK_224, KECCAK_256, KECCAK_384, KECCAK_512, SHAKE128, SHAKE256};

fn digest<const N: usize>(variant: &Variant, bytes: &[u8]) -> [u8; N] {
	let mut out = [0; N];
	variant.hash_into(bytes, &mut out);
	out
}

/// Returns the Keccak-224 digest of the byte slice passed to it.
pub fn keccak_224(bytes: &[u8]) -> [u8; 28] {
	digest(&KECCAK_224, bytes)
}

/// Returns the Keccak-256 digest of the byte slice passed to it.
pub fn keccak_256(bytes: &[u8]) -> [u8; 32] {
	digest(&KECCAK_256, bytes)
}

/// Returns the Keccak-384 digest of the byte slice passed to it.
pub fn keccak_384(bytes: &[u8]) -> [u8; 48] {
	digest(&KECCAK_384, bytes)
}

/// Returns the Keccak-512 digest of the byte slice passed to it.
pub fn keccak_512(bytes: &[u8]) -> [u8; 64] {
	digest(&KECCAK_512, bytes)
}

/// Returns the first `N` bytes of SHAKE128 output for `bytes`.
pub fn shake128<const N: usize>(bytes: &[u8]) -> [u8; N] {
	digest(&SHAKE128, bytes)
}

/// Returns the first `N` bytes of SHAKE256 output for `bytes`.
pub fn shake256<const N: usize>(bytes: &[u8]) -> [u8; N] {
	digest(&SHAKE256, bytes)
}

#[test]
fn matches_buffer_api() {
	let msg = b"the buffer and array forms agree";

	let mut out = [0; 64];

	crate::keccak_224(&mut out, 28, msg).unwrap();
	assert_eq!(keccak_224(msg), out[.. 28]);

	crate::keccak_256(&mut out, 32, msg).unwrap();
	assert_eq!(keccak_256(msg), out[.. 32]);

	crate::keccak_384(&mut out, 48, msg).unwrap();
	assert_eq!(keccak_384(msg), out[.. 48]);

	crate::keccak_512(&mut out, 64, msg).unwrap();
	assert_eq!(keccak_512(msg), out[..]);

	crate::shake128(&mut out, 64, msg).unwrap();
	assert_eq!(shake128::<64>(msg), out);

	crate::shake256(&mut out, 64, msg).unwrap();
	assert_eq!(shake256::<64>(msg), out);
}

#[test]
fn long_xof_output() {
	let long: [u8; 1000] = shake256(b"");
	let short: [u8; 64] = shake256(b"");

	assert_eq!(long[.. 64], short);
	assert_eq!(hex::encode(&short[.. 8]), "46b9dd2b0ba88d13");
}
