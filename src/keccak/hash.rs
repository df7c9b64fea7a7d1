//! The six hashing entry points.
//!
//! Each takes the output buffer, the number of bytes wanted, and the message,
//! and either fills `output[.. output_len]` or returns an [`Error`] without
//! touching `output`.

use super::variant::{KECCAK_224, KECCAK_256, KECCAK_384, KECCAK_512, SHAKE128, SHAKE256};
use crate::Error;

/// Keccak-224. `output_len` may be at most 28.
pub fn keccak_224(output: &mut [u8], output_len: usize, input: &[u8]) -> Result<(), Error> {
	KECCAK_224.hash(output, output_len, input)
}

/// Keccak-256, the Ethereum hash. `output_len` may be at most 32.
pub fn keccak_256(output: &mut [u8], output_len: usize, input: &[u8]) -> Result<(), Error> {
	KECCAK_256.hash(output, output_len, input)
}

/// Keccak-384. `output_len` may be at most 48.
pub fn keccak_384(output: &mut [u8], output_len: usize, input: &[u8]) -> Result<(), Error> {
	KECCAK_384.hash(output, output_len, input)
}

/// Keccak-512. `output_len` may be at most 64.
pub fn keccak_512(output: &mut [u8], output_len: usize, input: &[u8]) -> Result<(), Error> {
	KECCAK_512.hash(output, output_len, input)
}

/// SHAKE128 squeezed to `output_len` bytes.
pub fn shake128(output: &mut [u8], output_len: usize, input: &[u8]) -> Result<(), Error> {
	SHAKE128.hash(output, output_len, input)
}

/// SHAKE256 squeezed to `output_len` bytes.
pub fn shake256(output: &mut [u8], output_len: usize, input: &[u8]) -> Result<(), Error> {
	SHAKE256.hash(output, output_len, input)
}

#[cfg(test)]
type HashFn = fn(&mut [u8], usize, &[u8]) -> Result<(), Error>;

#[cfg(test)]
fn hex_hash(hasher: HashFn, output_len: usize, input: &[u8]) -> std::string::String {
	let mut out = std::vec![0; output_len];
	hasher(&mut out, output_len, input).unwrap();
	hex::encode(out)
}

#[test]
fn test_empty_inputs() {
	assert_eq!(
		hex_hash(keccak_224, 28, b""),
		"f71837502ba8e10837bdd8d365adb85591895602fc552b48b7390abd",
	);

	assert_eq!(
		hex_hash(keccak_256, 32, b""),
		"c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470",
	);

	assert_eq!(
		hex_hash(keccak_384, 48, b""),
		"2c23146a63a29acf99e73b88f8c24eaa7dc60aa771780ccc006afbfa8fe2479b2dd2b21362337441ac12b515911957ff",
	);

	assert_eq!(
		hex_hash(keccak_512, 64, b""),
		"0eab42de4c3ceb9235fc91acffe746b29c29a8c366b7c60e4e67c466f36a4304c00fa9caf9d87976ba469bcbe06713b435f091ef2769fb160cdab33d3670680e",
	);

	assert_eq!(
		hex_hash(shake128, 32, b""),
		"7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26",
	);

	assert_eq!(
		hex_hash(shake256, 64, b""),
		"46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762fd75dc4ddd8c0f200cb05019d67b592f6fc821c49479ab48640292eacb3b7c4be",
	);
}

#[test]
fn test_abc() {
	assert_eq!(
		hex_hash(keccak_224, 28, b"abc"),
		"c30411768506ebe1c2871b1ee2e87d38df342317300a9b97a95ec6a8",
	);

	assert_eq!(
		hex_hash(keccak_384, 48, b"abc"),
		"f7df1165f033337be098e7d288ad6a2f74409d7a60b49c36642218de161b1f99f8c681e4afaf31a34db29fb763e3c28e",
	);

	assert_eq!(
		hex_hash(keccak_512, 64, b"abc"),
		"18587dc2ea106b9a1563e32b3312421ca164c7f1f07bc922a9c83d77cea3a1e5d0c69910739025372dc14ac9642629379540c17e2a65b19d77aa511a9d00bb96",
	);
}

#[test]
fn test_ethereum_vectors() {
	assert_eq!(
		hex_hash(keccak_256, 32, b"a"),
		"3ac225168df54212a25c1c01fd35bebfea408fdac2e31ddd6f80a4bbf9a5f1cb",
	);

	assert_eq!(
		hex_hash(keccak_256, 32, b"hello world"),
		"47173285a8d7341e5e972fc677286384f802f8ef42a5ec5f03bbfa254cb01fad",
	);

	assert_eq!(
		hex_hash(keccak_256, 32, b"foobar"),
		"38d18acb67d25c8bb9942764b62f18e17054f66a817bd4295423adf9ed98873e",
	);

	let alice = b"Alice was beginning to get very tired of sitting by her sister on the bank, \
		and of having nothing to do: once or twice she had peeped into the book her sister \
		was reading, but it had no pictures or conversations in it, and what is the use of \
		a book, thought Alice without pictures or conversations?";

	assert_eq!(alice.len(), 298);
	assert_eq!(
		hex_hash(keccak_256, 32, alice),
		"3ce38e088f876c550dfebe3a1e6a99c2bc06d031106696786482e0b1406235fc",
	);
}

#[test]
fn test_rate_boundaries() {
	assert_eq!(
		hex_hash(keccak_256, 32, &[0; 135]),
		"29e3704feeca7fb9ba229f0fa04d9b36449cf3ad6e1d85d9cfff3a10df9abc3e",
	);

	assert_eq!(
		hex_hash(keccak_256, 32, &[0; 136]),
		"3a5912a7c5faa06ee4fe906253e339467a9ce87d533c65be3c15cb231cdb25f9",
	);

	assert_eq!(
		hex_hash(keccak_256, 32, &[0; 137]),
		"bee7fbb405cb0d91a8775e338c4a5e4b5d6b2d051f687fa942043cffdc73bd28",
	);

	assert_eq!(
		hex_hash(keccak_512, 64, &[0; 71]),
		"cd6559fb64f7e8e4facf51d6b402804d2006b04221e4821573ed9a368a7654ad1329d40df833c486e516d402f1bbfd8a14bdc3a1588d4d68c8341cb32e5091c3",
	);

	assert_eq!(
		hex_hash(keccak_512, 64, &[0; 72]),
		"bcf38e5b375422155b4d8eb150682a14778b0695d709cec479d013a772497bc8d7050ef2a23d69609d609b15e5001f275c4619270ffbd6e8c06a7a5bf72334b3",
	);

	let counting = |len: usize| (0 .. len).map(|i| i as u8).collect::<std::vec::Vec<_>>();

	assert_eq!(
		hex_hash(shake128, 32, &counting(167)),
		"1e552791cc4e93a0d4a8dc47ae49228c2faa869e40e628f6ace477aec3f1ca7a",
	);

	assert_eq!(
		hex_hash(shake128, 32, &counting(168)),
		"f15277eb61c4908d44a2853f3cde071ae2ed7a23461fbe162a1a98cf6875059c",
	);

	assert_eq!(
		hex_hash(shake128, 32, &counting(169)),
		"015be3338c986d9846affa0f94b4afc2a76bc289c709e1a596ec9eccf090a773",
	);
}

#[test]
fn test_shake_prefix() {
	let short = hex_hash(shake128, 16, b"");
	let long = hex_hash(shake128, 32, b"");

	assert_eq!(short, "7f9c2ba4e88f827d616045507605853e");
	assert!(long.starts_with(&short));

	// bytes 336 .. 352 come out of the third permutation
	let mut out = [0; 400];
	shake128(&mut out, 400, b"abc").unwrap();
	assert_eq!(hex::encode(&out[336 .. 352]), "4cedd50d30a223e7d54e9a24f0a2526b");

	let mut prefix = [0; 200];
	shake128(&mut prefix, 200, b"abc").unwrap();
	assert_eq!(prefix[..], out[.. 200]);
}

#[test]
fn test_digest_sizes_are_fixed() {
	let fixed: [(HashFn, usize); 4] = [
		(keccak_224, 28),
		(keccak_256, 32),
		(keccak_384, 48),
		(keccak_512, 64),
	];

	for (hasher, size) in fixed {
		for len in [0, 1, 71, 72, 73, 1000] {
			let msg = std::vec![0xa5; len];
			let mut out = [0; 80];

			hasher(&mut out, size, &msg).unwrap();
			assert!(out[size ..].iter().all(|&b| b == 0));

			assert_eq!(
				hasher(&mut out, size + 1, &msg),
				Err(Error::DigestTooLong {
					variant: match size {
						28 => "keccak-224",
						32 => "keccak-256",
						48 => "keccak-384",
						_ => "keccak-512",
					},
					max: size,
					requested: size + 1,
				}),
			);
		}
	}
}

#[test]
fn test_short_output_is_a_prefix() {
	let mut full = [0; 32];
	let mut short = [0; 20];

	keccak_256(&mut full, 32, b"truncate me").unwrap();
	keccak_256(&mut short, 20, b"truncate me").unwrap();

	assert_eq!(short[..], full[.. 20]);
}

#[test]
fn test_rejected_calls_leave_output_alone() {
	let mut out = [0xee; 16];

	assert_eq!(
		shake256(&mut out, 17, b"x"),
		Err(Error::BufferTooSmall {requested: 17, capacity: 16}),
	);

	assert_eq!(
		keccak_256(&mut out, 32, b"x"),
		Err(Error::BufferTooSmall {requested: 32, capacity: 16}),
	);

	assert_eq!(out, [0xee; 16]);

	// a larger buffer is fine, only the requested bytes are written
	let mut out = [0xee; 48];
	keccak_256(&mut out, 32, b"x").unwrap();
	assert_eq!(out[32 ..], [0xee; 16]);
}

#[test]
fn test_deterministic() {
	let msg = b"the same message twice";

	assert_eq!(hex_hash(keccak_384, 48, msg), hex_hash(keccak_384, 48, msg));
	assert_eq!(hex_hash(shake256, 300, msg), hex_hash(shake256, 300, msg));
}

#[test]
fn test_sha3_domain_differs() {
	use super::variant::SHA3_256;

	let mut sha3 = [0; 32];
	SHA3_256.hash(&mut sha3, 32, b"").unwrap();

	assert_eq!(
		hex::encode(sha3),
		"a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
	);

	let msgs: [&[u8]; 4] = [b"", b"a", b"hello world", &[0; 136]];

	for msg in msgs {
		let mut keccak = [0; 32];
		keccak_256(&mut keccak, 32, msg).unwrap();
		SHA3_256.hash(&mut sha3, 32, msg).unwrap();

		assert_ne!(keccak, sha3);
	}
}

#[test]
fn test_avalanche() {
	let msg = *b"avalanche check over 32 bytes!!!";
	let mut base = [0; 32];
	keccak_256(&mut base, 32, &msg).unwrap();

	let mut total = 0;

	for bit in 0 .. msg.len() * 8 {
		let mut flipped = msg;
		flipped[bit / 8] ^= 1 << (bit % 8);

		let mut out = [0; 32];
		keccak_256(&mut out, 32, &flipped).unwrap();

		let changed: u32 = base.iter().zip(out.iter()).map(|(a, b)| (a ^ b).count_ones()).sum();

		assert!((64 ..= 192).contains(&changed), "bit {} changed {} output bits", bit, changed);
		total += changed;
	}

	let mean = total as f64 / (msg.len() * 8) as f64;
	assert!((118.0 .. 138.0).contains(&mean), "mean of {} changed bits", mean);
}

#[cfg(feature = "std")]
#[test]
fn test_parallel_calls_agree() {
	let expected = hex_hash(keccak_256, 32, b"shared across threads");

	let handles: std::vec::Vec<_> = (0 .. 8)
		.map(|_| std::thread::spawn(|| hex_hash(keccak_256, 32, b"shared across threads")))
		.collect();

	for handle in handles {
		assert_eq!(handle.join().unwrap(), expected);
	}
}
