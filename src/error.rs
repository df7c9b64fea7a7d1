use thiserror::Error;

/// Reasons a hashing call refuses to run.
///
/// Both are caller contract violations; the output buffer is left untouched
/// whenever one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
	#[error("output buffer holds {capacity} bytes but {requested} were requested")]
	BufferTooSmall {requested: usize, capacity: usize},

	#[error("{variant} produces at most {max} bytes, {requested} were requested")]
	DigestTooLong {variant: &'static str, max: usize, requested: usize},
}

impl Error {
	/// The status code a C-style caller expects in place of this error.
	/// Success is `0`.
	pub fn status(&self) -> i32 {
		-1
	}
}

#[test]
fn error_messages() {
	let err = Error::BufferTooSmall {requested: 32, capacity: 16};
	assert_eq!(err.to_string(), "output buffer holds 16 bytes but 32 were requested");
	assert_eq!(err.status(), -1);

	let err = Error::DigestTooLong {variant: "keccak-256", max: 32, requested: 33};
	assert_eq!(err.to_string(), "keccak-256 produces at most 32 bytes, 33 were requested");
}
