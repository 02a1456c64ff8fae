use log::trace;

use crate::json::cursor::Cursor;
use crate::json::scalar::{MAX_FLOAT_PRECISION, write_number};
use crate::json::string::encode_str;
use crate::json::value::{Member, Value};
use crate::json::{EncodeError, Result};

/// Behavior switches shared by the estimate and encode passes.
///
/// Both passes must see the same options for one value, or the buffer size
/// no longer matches what is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
	/// Write opaque values as their scalar text instead of recursing into
	/// their inner representation.
	pub stringify_opaque: bool,
	/// Significant digits used for non-integral numbers (`%g` style).
	pub float_precision: u8,
}

impl Default for EncodeOptions {
	fn default() -> Self {
		Self {
			stringify_opaque: false,
			float_precision: 6,
		}
	}
}

impl EncodeOptions {
	/// Preset writing enough float digits to parse back to the same `f64`.
	pub fn round_trip() -> Self {
		Self {
			float_precision: MAX_FLOAT_PRECISION,
			..Self::default()
		}
	}

	/// Preset that never recurses into opaque values.
	pub fn stringified() -> Self {
		Self {
			stringify_opaque: true,
			..Self::default()
		}
	}

	/// Reject option values the formatter would otherwise clamp.
	pub fn validate(&self) -> Result<()> {
		if !(1..=MAX_FLOAT_PRECISION).contains(&self.float_precision) {
			return Err(EncodeError::InvalidFloatPrecision {
				precision: self.float_precision,
			});
		}
		Ok(())
	}
}

/// Write `value` at the cursor and advance past it.
///
/// The cursor must hold at least `estimate(value, opt)` free bytes.
pub fn encode_value(cursor: &mut Cursor<'_>, value: &Value, opt: &EncodeOptions) {
	match value {
		Value::Undefined | Value::Null => cursor.put_slice(b"null"),
		Value::Bool(true) => cursor.put_slice(b"true"),
		Value::Bool(false) => cursor.put_slice(b"false"),
		Value::Number(number) => write_number(cursor, *number, opt.float_precision),
		Value::String(bytes) => encode_str(cursor, bytes),
		Value::Array(items) => encode_array(cursor, items, opt),
		Value::Object(members) => encode_object(cursor, members, opt),
		Value::Opaque(item) => {
			if opt.stringify_opaque {
				trace!("stringifying opaque {} value", item.class);
				encode_str(cursor, &item.text);
			} else {
				encode_value(cursor, &item.inner, opt);
			}
		}
	}
}

fn encode_array(cursor: &mut Cursor<'_>, items: &[Value], opt: &EncodeOptions) {
	cursor.put(b'[');
	if let Some((last, head)) = items.split_last() {
		for item in head {
			encode_value(cursor, item, opt);
			cursor.put(b',');
		}
		encode_value(cursor, last, opt);
	}
	cursor.put(b']');
}

fn encode_object(cursor: &mut Cursor<'_>, members: &[Member], opt: &EncodeOptions) {
	cursor.put(b'{');
	for member in members {
		encode_str(cursor, &member.key);
		cursor.put(b':');
		encode_value(cursor, &member.value, opt);
		cursor.put(b',');
	}

	// the trailing comma, if any, becomes the closing brace
	if cursor.last() == Some(b'{') {
		cursor.put(b'}');
	} else {
		cursor.replace_last(b'}');
	}
}
