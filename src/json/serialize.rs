use log::{debug, trace};

use crate::json::cursor::Cursor;
use crate::json::encode::{EncodeOptions, encode_value};
use crate::json::estimate::estimate;
use crate::json::value::Value;
use crate::json::{EncodeError, Result};

/// Encoded output together with the capacity reserved for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Serialized {
	/// Compact JSON bytes.
	pub bytes: Vec<u8>,
	/// Estimated length the buffer was allocated with.
	pub estimated: usize,
}

impl Serialized {
	/// Bytes reserved by the estimate but not written.
	pub fn slack(&self) -> usize {
		self.estimated - self.bytes.len()
	}
}

/// Estimate, allocate once, and encode `value`.
pub fn serialize(value: &Value, opt: &EncodeOptions) -> Serialized {
	let estimated = estimate(value, opt);
	let mut bytes = vec![0_u8; estimated];

	let mut cursor = Cursor::new(&mut bytes);
	encode_value(&mut cursor, value, opt);
	let written = cursor.pos();
	bytes.truncate(written);

	debug!("encoded {} value: {written} bytes, estimated {estimated}", value.kind());
	Serialized { bytes, estimated }
}

/// Encode `value` into a single exactly-sized allocation.
pub fn to_vec(value: &Value, opt: &EncodeOptions) -> Vec<u8> {
	serialize(value, opt).bytes
}

/// Encode `value` and return it as text.
pub fn to_string(value: &Value, opt: &EncodeOptions) -> Result<String> {
	String::from_utf8(to_vec(value, opt)).map_err(|err| EncodeError::InvalidUtf8 {
		valid_up_to: err.utf8_error().valid_up_to(),
	})
}

/// Encode `value` into a caller-provided buffer and return the end offset.
///
/// The buffer is checked once against the estimate before anything is
/// written; the write pass itself does no capacity checks.
pub fn encode_into(buf: &mut [u8], value: &Value, opt: &EncodeOptions) -> Result<usize> {
	let need = estimate(value, opt);
	if buf.len() < need {
		trace!("rejecting {} byte buffer, estimate is {need}", buf.len());
		return Err(EncodeError::BufferTooSmall { need, have: buf.len() });
	}

	let mut cursor = Cursor::new(buf);
	encode_value(&mut cursor, value, opt);
	Ok(cursor.pos())
}
