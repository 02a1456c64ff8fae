//! Conversion between host representations and [`Value`].
//!
//! The encoder only ever walks `Value`; everything host-specific stops here.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::json::value::{Member, Number, Value};

impl From<&serde_json::Value> for Value {
	fn from(value: &serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(flag) => Value::Bool(*flag),
			serde_json::Value::Number(number) => Value::Number(number_from_json(number)),
			serde_json::Value::String(text) => Value::from(text.as_str()),
			serde_json::Value::Array(items) => Value::Array(items.iter().map(Value::from).collect()),
			serde_json::Value::Object(map) => Value::Object(map.iter().map(|(key, item)| Member::new(key, Value::from(item))).collect()),
		}
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		Value::from(&value)
	}
}

fn number_from_json(number: &serde_json::Number) -> Number {
	match number.as_i64() {
		Some(int) => Number::from_i64(int),
		// u64 above i64::MAX and real floats
		None => Number::from_f64(number.as_f64().unwrap_or(f64::NAN)),
	}
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Value::Undefined | Value::Null => serializer.serialize_unit(),
			Value::Bool(flag) => serializer.serialize_bool(*flag),
			Value::Number(number) => match number.as_exact_i64() {
				Some(int) => serializer.serialize_i64(int),
				None => serializer.serialize_f64(number.as_f64()),
			},
			Value::String(bytes) => match std::str::from_utf8(bytes) {
				Ok(text) => serializer.serialize_str(text),
				Err(_) => serializer.serialize_bytes(bytes),
			},
			Value::Array(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Value::Object(members) => {
				let mut map = serializer.serialize_map(Some(members.len()))?;
				for member in members {
					map.serialize_entry(&*String::from_utf8_lossy(&member.key), &member.value)?;
				}
				map.end()
			}
			Value::Opaque(item) => item.inner.serialize(serializer),
		}
	}
}
