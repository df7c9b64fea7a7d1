//! The Keccak-f\[1600\] permutation, the sponge built on it, and the six hash
//! functions exposed through it.

mod constants;
mod hash;
mod padding;
mod sponge;
mod state;
mod variant;

use constants::{ROTATION_OFFSETS, ROUND_CONSTANTS};
use padding::Padding;
use sponge::Sponge;

mod components {
	pub mod chi;
	pub mod iota;
	pub mod pi;
	pub mod rho;
	pub mod theta;
}

use components::chi::chi;
use components::iota::iota;
use components::pi::pi;
use components::rho::rho;
use components::theta::theta;

pub use hash::{keccak_224, keccak_256, keccak_384, keccak_512, shake128, shake256};
pub use state::State;
pub use variant::{Domain, Variant, FIXED_DIGEST_DOMAIN};
pub use variant::{KECCAK_224, KECCAK_256, KECCAK_384, KECCAK_512, SHAKE128, SHAKE256};

/// Size of the permutation state in bytes.
pub const STATE_BYTES: usize = 200;

pub const ROUNDS: usize = 24;

/// The state as 64-bit lanes, indexed `[x][y]`.
pub type Lanes = [[u64; 5]; 5];

/// Applies Keccak-f\[1600\] to a lane array.
pub fn keccak_f(state: &mut Lanes) {
	for round in 0 .. ROUNDS {
		theta(state);
		rho(state);
		pi(state);
		chi(state);
		iota(state, round);
	}
}

/// Applies Keccak-f\[1600\] to a state given as its 200-byte little-endian
/// encoding.
pub fn permute(bytes: &mut [u8; STATE_BYTES]) {
	let mut state = State::from_bytes(bytes);
	state.permute();
	*bytes = state.to_bytes();
}

#[test]
fn permutation_of_the_zero_state() {
	let mut lanes = [[0; 5]; 5];

	keccak_f(&mut lanes);
	assert_eq!(lanes[0][0], 0xf1258f7940e1dde7);
	assert_eq!(lanes[1][0], 0x84d5ccf933c0478a);
	assert_eq!(lanes[4][4], 0xeaf1ff7b5ceca249);

	keccak_f(&mut lanes);
	assert_eq!(lanes[0][0], 0x2d5c954df96ecb3c);
}

#[test]
fn byte_permutation_matches_lane_permutation() {
	let mut bytes = [0; STATE_BYTES];
	permute(&mut bytes);

	assert_eq!(bytes[.. 8], 0xf1258f7940e1dde7u64.to_le_bytes());
	assert_eq!(bytes[192 ..], 0xeaf1ff7b5ceca249u64.to_le_bytes());
}
