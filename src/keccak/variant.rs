use log::debug;

use super::{Sponge, STATE_BYTES};
use crate::Error;

/// The suffix bits appended to a message ahead of `pad10*1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
	/// The Keccak submission padding, as used by Ethereum.
	Keccak,
	/// FIPS 202 SHA3 fixed-output functions.
	Sha3,
	/// FIPS 202 SHAKE extendable-output functions.
	Shake,
}

impl Domain {
	pub const fn suffix(self) -> u8 {
		match self {
			Domain::Keccak => 0x01,
			Domain::Sha3 => 0x06,
			Domain::Shake => 0x1f,
		}
	}
}

/// Padding used by the four fixed-digest functions.
///
/// This is the one switch between Keccak and NIST SHA3 output: set to
/// [`Domain::Sha3`] and `keccak_256` becomes SHA3-256. Every digest changes,
/// so the vectors in this crate only hold for [`Domain::Keccak`].
pub const FIXED_DIGEST_DOMAIN: Domain = Domain::Keccak;

/// Sponge parameters for one hash function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
	name: &'static str,
	rate: usize,
	domain: Domain,
	output_len: Option<usize>,
}

impl Variant {
	// capacity is twice the security level, so the rate is what is left over
	const fn fixed(name: &'static str, bits: usize) -> Self {
		Self {
			name,
			rate: STATE_BYTES - bits / 4,
			domain: FIXED_DIGEST_DOMAIN,
			output_len: Some(bits / 8),
		}
	}

	const fn xof(name: &'static str, security_bits: usize) -> Self {
		Self {
			name,
			rate: STATE_BYTES - security_bits / 4,
			domain: Domain::Shake,
			output_len: None,
		}
	}

	pub const fn name(&self) -> &'static str {
		self.name
	}

	/// Bytes absorbed or squeezed per permutation.
	pub const fn rate(&self) -> usize {
		self.rate
	}

	pub const fn capacity(&self) -> usize {
		STATE_BYTES - self.rate
	}

	pub const fn domain(&self) -> Domain {
		self.domain
	}

	/// The digest size, or `None` for an extendable-output function.
	pub const fn output_len(&self) -> Option<usize> {
		self.output_len
	}

	/// Writes `output_len` bytes of the hash of `input` to the front of
	/// `output`.
	///
	/// Fixed-digest variants accept any `output_len` up to their digest size
	/// and return that prefix of the digest. Nothing is written on error.
	pub fn hash(&self, output: &mut [u8], output_len: usize, input: &[u8]) -> Result<(), Error> {
		if output.len() < output_len {
			debug!("{}: {}-byte buffer for {} bytes of output", self.name, output.len(), output_len);

			return Err(Error::BufferTooSmall {
				requested: output_len,
				capacity: output.len(),
			});
		}

		if let Some(max) = self.output_len {
			if output_len > max {
				debug!("{}: {} bytes requested from a {}-byte digest", self.name, output_len, max);

				return Err(Error::DigestTooLong {
					variant: self.name,
					max,
					requested: output_len,
				});
			}
		}

		self.hash_into(input, &mut output[.. output_len]);

		Ok(())
	}

	/// Fills all of `output`; callers have already checked its length.
	pub(crate) fn hash_into(&self, input: &[u8], output: &mut [u8]) {
		Sponge::new(self.rate)
			.absorb(input, self.domain.suffix())
			.squeeze(output);
	}
}

pub const KECCAK_224: Variant = Variant::fixed("keccak-224", 224);
pub const KECCAK_256: Variant = Variant::fixed("keccak-256", 256);
pub const KECCAK_384: Variant = Variant::fixed("keccak-384", 384);
pub const KECCAK_512: Variant = Variant::fixed("keccak-512", 512);

pub const SHAKE128: Variant = Variant::xof("shake128", 128);
pub const SHAKE256: Variant = Variant::xof("shake256", 256);

#[cfg(test)]
pub const SHA3_256: Variant = Variant {
	name: "sha3-256",
	domain: Domain::Sha3,
	..KECCAK_256
};

#[test]
fn rates_and_capacities() {
	let table = [
		(KECCAK_224, 144, Some(28)),
		(KECCAK_256, 136, Some(32)),
		(KECCAK_384, 104, Some(48)),
		(KECCAK_512, 72, Some(64)),
		(SHAKE128, 168, None),
		(SHAKE256, 136, None),
	];

	for (variant, rate, output_len) in table {
		assert_eq!(variant.rate(), rate, "{}", variant.name());
		assert_eq!(variant.rate() + variant.capacity(), STATE_BYTES);
		assert_eq!(variant.rate() % 8, 0);
		assert_eq!(variant.output_len(), output_len);

		if let Some(len) = output_len {
			assert!(len <= variant.rate());
		}
	}
}

#[test]
fn domain_suffixes() {
	assert_eq!(KECCAK_256.domain().suffix(), 0x01);
	assert_eq!(SHA3_256.domain().suffix(), 0x06);
	assert_eq!(SHAKE128.domain().suffix(), 0x1f);
	assert_eq!(SHAKE256.domain(), Domain::Shake);
}
