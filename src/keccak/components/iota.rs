use super::super::{Lanes, ROUND_CONSTANTS};

pub fn iota(state: &mut Lanes, round_number: usize) {
	state[0][0] ^= ROUND_CONSTANTS[round_number];
}
