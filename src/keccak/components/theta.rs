use super::super::Lanes;

pub fn theta(state: &mut Lanes) {
	let mut parities = [0u64; 5];

	for (parity, column) in parities.iter_mut().zip(state.iter()) {
		*parity = column.iter().fold(0, |acc, &lane| acc ^ lane);
	}

	for x in 0 .. 5 {
		let xm1 = (x + 4) % 5;
		let xp1 = (x + 1) % 5;

		let crossed_parities = parities[xm1] ^ parities[xp1].rotate_left(1);

		for lane in state[x].iter_mut() {
			*lane ^= crossed_parities;
		}
	}
}

#[test]
fn single_bit_spreads_to_eleven_lanes() {
	let mut state = [[0; 5]; 5];
	state[2][3] = 1;

	theta(&mut state);

	let touched = state.iter().flatten().filter(|&&lane| lane != 0).count();

	// column 3 picks up bit 0, column 1 picks up bit 1
	assert_eq!(touched, 11);
	assert_eq!(state[2][3], 1);
	assert!(state[3].iter().all(|&lane| lane == 1));
	assert!(state[1].iter().all(|&lane| lane == 2));
}
