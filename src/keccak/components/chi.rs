use super::super::Lanes;

pub fn chi(state: &mut Lanes) {
	for y in 0 .. 5 {
		let row = [state[0][y], state[1][y], state[2][y], state[3][y], state[4][y]];

		for x in 0 .. 5 {
			state[x][y] ^= !row[(x + 1) % 5] & row[(x + 2) % 5];
		}
	}
}

#[test]
fn rows_mix_independently() {
	let mut state = [[0; 5]; 5];
	state[2][1] = u64::MAX;

	chi(&mut state);

	// only x = 0 sees (!0 & 1s) from its x + 1 / x + 2 neighbours
	assert_eq!(state[0][1], u64::MAX);
	assert_eq!(state[1][1], 0);
	assert_eq!(state[2][1], u64::MAX);
	assert!(state.iter().all(|column| column[0] == 0 && column[2] == 0));
}
