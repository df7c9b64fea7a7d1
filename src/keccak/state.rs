use zeroize::Zeroize;

use super::{keccak_f, Lanes, STATE_BYTES};

/// The 1600-bit sponge state.
///
/// Lanes are addressed as `lanes[x][y]`; the byte view numbers lane `x + 5y`
/// as bytes `8 * (x + 5y) ..` in little-endian order. The state is wiped when
/// dropped.
pub struct State {
	lanes: Lanes,
}

impl State {
	pub fn new() -> Self {
		Self {lanes: [[0; 5]; 5]}
	}

	pub fn from_bytes(bytes: &[u8; STATE_BYTES]) -> Self {
		let mut state = Self::new();
		state.xor_bytes(bytes);
		state
	}

	pub fn to_bytes(&self) -> [u8; STATE_BYTES] {
		let mut out = [0; STATE_BYTES];
		self.copy_bytes(&mut out);
		out
	}

	/// XORs `bytes` into the leading bytes of the state.
	pub fn xor_bytes(&mut self, bytes: &[u8]) {
		debug_assert!(bytes.len() <= STATE_BYTES);

		for (i, chunk) in bytes.chunks(8).enumerate() {
			let mut word = [0; 8];
			word[.. chunk.len()].copy_from_slice(chunk);

			self.lanes[i % 5][i / 5] ^= u64::from_le_bytes(word);
		}
	}

	/// Fills `out` from the leading bytes of the state.
	pub fn copy_bytes(&self, out: &mut [u8]) {
		debug_assert!(out.len() <= STATE_BYTES);

		for (i, chunk) in out.chunks_mut(8).enumerate() {
			let word = self.lanes[i % 5][i / 5].to_le_bytes();
			chunk.copy_from_slice(&word[.. chunk.len()]);
		}
	}

	pub fn permute(&mut self) {
		keccak_f(&mut self.lanes);
	}
}

impl Default for State {
	fn default() -> Self {
		Self::new()
	}
}

impl Zeroize for State {
	fn zeroize(&mut self) {
		self.lanes.zeroize();
	}
}

impl Drop for State {
	fn drop(&mut self) {
		self.zeroize();
	}
}

#[test]
fn byte_view_is_little_endian_lane_order() {
	let mut bytes = [0; STATE_BYTES];
	bytes[0] = 0x01;
	bytes[7] = 0x80;
	// lane index 6 is (x, y) = (1, 1)
	bytes[6 * 8 + 1] = 0xff;

	let state = State::from_bytes(&bytes);

	assert_eq!(state.lanes[0][0], 0x8000_0000_0000_0001);
	assert_eq!(state.lanes[1][1], 0xff00);
	assert_eq!(state.to_bytes(), bytes);
}

#[test]
fn partial_words_round_trip() {
	let mut state = State::new();
	state.xor_bytes(&[0xaa; 13]);
	state.xor_bytes(&[0xff; 3]);

	let mut out = [0; 13];
	state.copy_bytes(&mut out);

	assert_eq!(out[.. 3], [0x55; 3]);
	assert_eq!(out[3 ..], [0xaa; 10]);
	assert_eq!(state.lanes[1][0] >> 40, 0);
}

#[test]
fn zeroize_clears_every_lane() {
	let mut state = State::from_bytes(&[0x5a; STATE_BYTES]);
	state.zeroize();

	assert_eq!(state.to_bytes(), [0; STATE_BYTES]);
}
