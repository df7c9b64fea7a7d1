use log::trace;

use super::{Padding, State, STATE_BYTES};

/// A sponge in its absorbing phase.
///
/// Absorbing consumes the sponge and hands back a [`Squeezer`], which in turn
/// is consumed by squeezing, so a state is never absorbed into after output
/// has been read from it.
pub struct Sponge {
	state: State,
	rate: usize,
}

/// A sponge in its squeezing phase.
pub struct Squeezer {
	state: State,
	rate: usize,
}

impl Sponge {
	pub fn new(rate: usize) -> Self {
		debug_assert!(rate > 0 && rate < STATE_BYTES);

		Self {state: State::new(), rate}
	}

	/// Pads `message` with the `domain` suffix and absorbs every block. Only
	/// the first `rate` bytes of the state are ever written.
	pub fn absorb(mut self, message: &[u8], domain: u8) -> Squeezer {
		let blocks = Padding::new(message, self.rate, domain);

		trace!(
			"absorbing {} bytes as {} blocks of {} (domain {:#04x})",
			message.len(),
			blocks.len(),
			self.rate,
			domain,
		);

		for block in blocks {
			self.state.xor_bytes(&block[.. self.rate]);
			self.state.permute();
		}

		Squeezer {state: self.state, rate: self.rate}
	}
}

impl Squeezer {
	/// Fills `output` a rate at a time, permuting between blocks.
	pub fn squeeze(mut self, output: &mut [u8]) {
		trace!(
			"squeezing {} bytes in {} blocks of {}",
			output.len(),
			output.len().div_ceil(self.rate),
			self.rate,
		);

		for (i, chunk) in output.chunks_mut(self.rate).enumerate() {
			if i > 0 {
				self.state.permute();
			}

			self.state.copy_bytes(chunk);
		}
	}
}

#[test]
fn capacity_is_untouched_by_absorption() {
	let rate = 136;
	let mut sponge = Sponge::new(rate);

	// stand-in for absorbing without the permutation
	for block in Padding::new(&[0xff; 300], rate, 0x01) {
		sponge.state.xor_bytes(&block[.. rate]);
	}

	let bytes = sponge.state.to_bytes();

	assert!(bytes[rate ..].iter().all(|&b| b == 0));
}

#[test]
fn squeeze_is_a_prefix_of_longer_squeezes() {
	let mut short = [0; 100];
	let mut long = [0; 500];

	Sponge::new(168).absorb(b"prefix", 0x1f).squeeze(&mut short);
	Sponge::new(168).absorb(b"prefix", 0x1f).squeeze(&mut long);

	assert_eq!(short[..], long[.. 100]);
	assert_ne!(long[168 .. 336], long[.. 168]);
}

#[test]
fn empty_squeeze_writes_nothing() {
	let mut out: [u8; 0] = [];
	Sponge::new(72).absorb(b"", 0x01).squeeze(&mut out);
}
