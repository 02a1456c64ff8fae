/// Write cursor over a buffer pre-sized by the estimator.
///
/// The cursor never grows its buffer. Writing past the end panics instead of
/// corrupting memory; the estimator keeps that from happening.
pub struct Cursor<'a> {
	bytes: &'a mut [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a mut [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset, which is also the written length.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Write one byte and advance.
	#[inline]
	pub fn put(&mut self, byte: u8) {
		self.bytes[self.pos] = byte;
		self.pos += 1;
	}

	/// Write a byte run and advance past it.
	#[inline]
	pub fn put_slice(&mut self, bytes: &[u8]) {
		let end = self.pos + bytes.len();
		self.bytes[self.pos..end].copy_from_slice(bytes);
		self.pos = end;
	}

	/// Write one byte at the current position without advancing.
	#[inline]
	pub fn poke(&mut self, byte: u8) {
		self.bytes[self.pos] = byte;
	}

	/// Advance by `n` bytes already written through [`Cursor::poke`].
	#[inline]
	pub fn advance(&mut self, n: usize) {
		self.pos += n;
	}

	/// Return the most recently written byte.
	pub fn last(&self) -> Option<u8> {
		self.pos.checked_sub(1).map(|idx| self.bytes[idx])
	}

	/// Overwrite the most recently written byte.
	pub fn replace_last(&mut self, byte: u8) {
		self.bytes[self.pos - 1] = byte;
	}

	/// Return everything written so far.
	pub fn written(&self) -> &[u8] {
		&self.bytes[..self.pos]
	}
}
