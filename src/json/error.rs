use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Errors produced around the encoding passes.
///
/// The estimate and encode passes themselves are total; these cover caller
/// contracts, option validation, and the CLI's input and output.
#[derive(Debug, Error)]
pub enum EncodeError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input document was not valid JSON.
	#[error("parse: {0}")]
	Parse(#[from] serde_json::Error),
	/// Caller buffer is smaller than the estimated output length.
	#[error("buffer too small: need {need} bytes, have {have}")]
	BufferTooSmall {
		/// Estimated output length.
		need: usize,
		/// Provided buffer length.
		have: usize,
	},
	/// Encoded bytes are not UTF-8 because a byte string was not.
	#[error("encoded output is not utf-8 (valid up to {valid_up_to})")]
	InvalidUtf8 {
		/// Length of the valid UTF-8 prefix.
		valid_up_to: usize,
	},
	/// Float precision option outside `1..=17`.
	#[error("invalid float precision {precision} (expected 1..=17)")]
	InvalidFloatPrecision {
		/// Requested significant digits.
		precision: u8,
	},
}
