use super::STATE_BYTES;

/// Splits a message into rate-sized blocks, applying the domain suffix and
/// `pad10*1` to the last one.
///
/// Blocks are handed out in a full-state buffer; only the first `rate` bytes
/// are meaningful.
pub struct Padding<'a> {
	bytes: &'a [u8],
	rate: usize,
	domain: u8,
	done: bool,
}

impl<'a> Padding<'a> {
	pub fn new(bytes: &'a [u8], rate: usize, domain: u8) -> Self {
		debug_assert!(rate > 0 && rate < STATE_BYTES);

		Self {bytes, rate, domain, done: false}
	}
}

impl<'a> Iterator for Padding<'a> {
	type Item = [u8; STATE_BYTES];

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		let mut buf = [0; STATE_BYTES];
		let block = &mut buf[.. self.rate];

		if self.bytes.len() >= self.rate {
			block.copy_from_slice(&self.bytes[.. self.rate]);
			self.bytes = &self.bytes[self.rate ..];
		} else {
			// with rate - 1 bytes left the suffix and the final bit share a byte
			block[.. self.bytes.len()].copy_from_slice(self.bytes);
			block[self.bytes.len()] |= self.domain;
			block[self.rate - 1] |= 0x80;
			self.done = true;
		}

		Some(buf)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = if self.done {0} else {self.bytes.len() / self.rate + 1};
		(remaining, Some(remaining))
	}
}

impl<'a> ExactSizeIterator for Padding<'a> {}

#[cfg(test)]
fn padded(bytes: &[u8], rate: usize, domain: u8) -> std::vec::Vec<u8> {
	Padding::new(bytes, rate, domain)
		.flat_map(|block| block[.. rate].to_vec())
		.collect()
}

#[test]
fn empty_message_is_one_block() {
	let out = padded(b"", 136, 0x01);

	assert_eq!(out.len(), 136);
	assert_eq!(out[0], 0x01);
	assert!(out[1 .. 135].iter().all(|&b| b == 0));
	assert_eq!(out[135], 0x80);
}

#[test]
fn suffix_and_final_bit_can_share_a_byte() {
	let msg = [0x33; 71];

	let keccak = padded(&msg, 72, 0x01);
	assert_eq!(keccak.len(), 72);
	assert_eq!(keccak[71], 0x81);

	let shake = padded(&msg, 72, 0x1f);
	assert_eq!(shake[71], 0x9f);
}

#[test]
fn block_counts_around_the_rate() {
	for rate in [72, 104, 136, 144, 168] {
		let msg = [0u8; 170];

		assert_eq!(Padding::new(&msg[.. rate - 1], rate, 0x06).len(), 1);
		assert_eq!(Padding::new(&msg[.. rate], rate, 0x06).len(), 2);
		assert_eq!(Padding::new(&msg[.. rate + 1], rate, 0x06).len(), 2);
		assert_eq!(Padding::new(&msg[.. rate + 1], rate, 0x06).count(), 2);
	}
}

#[test]
fn full_blocks_pass_through_untouched() {
	let msg: std::vec::Vec<u8> = (0 .. 168).map(|i| i as u8).collect();
	let out = padded(&msg, 168, 0x1f);

	assert_eq!(out.len(), 336);
	assert_eq!(out[.. 168], msg[..]);
	assert_eq!(out[168], 0x1f);
	assert_eq!(out[335], 0x80);
}
