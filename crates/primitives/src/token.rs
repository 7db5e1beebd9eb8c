/// Sequence number assigned to a lookup when it is issued.
///
/// Tokens only ever grow; comparing two of them tells which request was
/// issued later, independent of the order their responses arrive in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
	/// Wraps a raw sequence number.
	pub const fn new(seq: u64) -> Self {
		Self(seq)
	}

	/// Returns the raw sequence number.
	pub const fn get(self) -> u64 {
		self.0
	}
}
