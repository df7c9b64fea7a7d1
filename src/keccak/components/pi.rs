use super::super::Lanes;

pub fn pi(state: &mut Lanes) {
	let mut new_state = [[0; 5]; 5];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			let new_x = y;
			let new_y = (2 * x + 3 * y) % 5;

			new_state[new_x][new_y] = state[x][y];
		}
	}

	*state = new_state;
}

#[test]
fn lanes_move_along_the_orbit() {
	let mut state = [[0; 5]; 5];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			state[x][y] = (x * 5 + y) as u64;
		}
	}

	pi(&mut state);

	assert_eq!(state[0][0], 0);
	// (1, 0) lands on (0, 2)
	assert_eq!(state[0][2], 5);
	// (3, 4) lands on (4, 3)
	assert_eq!(state[4][3], 19);
}
