use crate::json::encode::EncodeOptions;
use crate::json::scalar::{NULL_LEN, number_len};
use crate::json::string::estimate_str;
use crate::json::value::{Member, Value};

/// Number of bytes `encode_value` writes for `value`, or more.
///
/// Never fails and never underestimates.
pub fn estimate(value: &Value, opt: &EncodeOptions) -> usize {
	match value {
		Value::Undefined | Value::Null => NULL_LEN,
		Value::Bool(true) => 4,
		Value::Bool(false) => 5,
		Value::Number(number) => number_len(*number, opt.float_precision),
		Value::String(bytes) => estimate_str(bytes),
		Value::Array(items) => estimate_array(items, opt),
		Value::Object(members) => estimate_object(members, opt),
		Value::Opaque(item) => {
			if opt.stringify_opaque {
				estimate_str(&item.text)
			} else {
				estimate(&item.inner, opt)
			}
		}
	}
}

fn estimate_array(items: &[Value], opt: &EncodeOptions) -> usize {
	if items.is_empty() {
		return 2;
	}

	// brackets plus one comma between neighbours
	let mut len = 2 + (items.len() - 1);
	for item in items {
		len += estimate(item, opt);
	}
	len
}

fn estimate_object(members: &[Member], opt: &EncodeOptions) -> usize {
	let mut len = 1;
	for member in members {
		// colon and comma; the last comma slot holds the closing brace
		len += 2;
		len += estimate_str(&member.key);
		len += estimate(&member.value, opt);
	}
	if len == 1 {
		len += 1;
	}
	len
}
