/// Largest magnitude bound for exact `f64 -> i64` conversion (`2^63`).
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Dynamically-typed value tree consumed by the serializer.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Absent slot. Distinct from `Null` in the model, identical in output.
	Undefined,
	Null,
	Bool(bool),
	Number(Number),
	/// Byte string of known length. Not required to be UTF-8.
	String(Box<[u8]>),
	Array(Vec<Value>),
	/// Insertion-ordered key/value pairs.
	Object(Vec<Member>),
	Opaque(Opaque),
}

/// One object entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
	pub key: Box<[u8]>,
	pub value: Value,
}

/// Tagged object carrying its own scalar conversion.
///
/// `text` is written when opaque values are stringified; otherwise the
/// serializer recurses into `inner`.
#[derive(Debug, Clone, PartialEq)]
pub struct Opaque {
	/// Tag or class name of the object.
	pub class: Box<str>,
	/// Scalar conversion of the object.
	pub text: Box<[u8]>,
	/// Representation exposed when the object is treated as a container.
	pub inner: Box<Value>,
}

/// Numeric scalar with integral and floating-point interpretations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(Repr);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Repr {
	Int(i64),
	Float(f64),
}

impl Number {
	/// Wrap a signed integer.
	pub fn from_i64(value: i64) -> Self {
		Self(Repr::Int(value))
	}

	/// Wrap a float.
	pub fn from_f64(value: f64) -> Self {
		Self(Repr::Float(value))
	}

	/// Floating-point interpretation.
	pub fn as_f64(self) -> f64 {
		match self.0 {
			Repr::Int(value) => value as f64,
			Repr::Float(value) => value,
		}
	}

	/// Integral interpretation, present only when the value is exactly
	/// representable as `i64` and is not NaN.
	pub fn as_exact_i64(self) -> Option<i64> {
		match self.0 {
			Repr::Int(value) => Some(value),
			Repr::Float(value) => exact_i64(value),
		}
	}

	/// Whether the number is neither NaN nor infinite.
	pub fn is_finite(self) -> bool {
		match self.0 {
			Repr::Int(_) => true,
			Repr::Float(value) => value.is_finite(),
		}
	}
}

fn exact_i64(value: f64) -> Option<i64> {
	if value.is_nan() || !(-TWO_POW_63..TWO_POW_63).contains(&value) {
		return None;
	}

	let int = value as i64;
	(int as f64 == value).then_some(int)
}

impl Member {
	/// Build an entry from anything convertible to a key and a value.
	pub fn new(key: impl AsRef<[u8]>, value: impl Into<Value>) -> Self {
		Self {
			key: key.as_ref().into(),
			value: value.into(),
		}
	}
}

impl Opaque {
	/// Build a tagged object from its class, scalar text, and inner value.
	pub fn new(class: &str, text: impl AsRef<[u8]>, inner: Value) -> Self {
		Self {
			class: class.into(),
			text: text.as_ref().into(),
			inner: Box::new(inner),
		}
	}
}

impl Value {
	/// Build an object from key/value pairs, keeping iteration order.
	pub fn object<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: AsRef<[u8]>,
		V: Into<Value>,
	{
		Value::Object(entries.into_iter().map(|(key, value)| Member::new(key, value)).collect())
	}

	/// Logical kind label, used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Value::Undefined => "undefined",
			Value::Null => "null",
			Value::Bool(_) => "bool",
			Value::Number(_) => "number",
			Value::String(_) => "string",
			Value::Array(_) => "array",
			Value::Object(_) => "object",
			Value::Opaque(_) => "opaque",
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Number(Number::from_i64(value))
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::Number(Number::from_i64(i64::from(value)))
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Number(Number::from_f64(value))
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.as_bytes().into())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::String(value.into_bytes().into_boxed_slice())
	}
}

impl From<&[u8]> for Value {
	fn from(value: &[u8]) -> Self {
		Value::String(value.into())
	}
}

impl From<Vec<Value>> for Value {
	fn from(value: Vec<Value>) -> Self {
		Value::Array(value)
	}
}

impl From<Opaque> for Value {
	fn from(value: Opaque) -> Self {
		Value::Opaque(value)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Value::Null, Into::into)
	}
}
