use super::super::{Lanes, ROTATION_OFFSETS};

pub fn rho(state: &mut Lanes) {
	for (column, offsets) in state.iter_mut().zip(ROTATION_OFFSETS.iter()) {
		for (lane, &offset) in column.iter_mut().zip(offsets.iter()) {
			*lane = lane.rotate_left(offset);
		}
	}
}

#[test]
fn origin_lane_is_not_rotated() {
	let mut state = [[1; 5]; 5];

	rho(&mut state);

	assert_eq!(state[0][0], 1);
	assert_eq!(state[1][0], 1 << 1);
	assert_eq!(state[4][4], 1 << 14);
}
