mod adapter;
mod cursor;
mod encode;
mod error;
mod estimate;
mod scalar;
mod serialize;
mod string;
mod value;

/// Write cursor over a pre-sized buffer.
pub use cursor::Cursor;
/// Buffer encoder pass and its options.
pub use encode::{EncodeOptions, encode_value};
/// Error and result aliases.
pub use error::{EncodeError, Result};
/// Size estimator pass.
pub use estimate::estimate;
/// Numeric formatting shared by both passes.
pub use scalar::{MAX_FLOAT_PRECISION, SMALL_INT_BOUND, int_len, number_len};
/// Bundled estimate-then-encode entry points.
pub use serialize::{Serialized, encode_into, serialize, to_string, to_vec};
/// String length estimation and escaping.
pub use string::{encode_str, estimate_str};
/// Dynamically-typed value model.
pub use value::{Member, Number, Opaque, Value};
