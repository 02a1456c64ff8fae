use std::io::Read;
use std::path::Path;

use jsonsize::json::{EncodeOptions, Result, Value};
use log::debug;

/// Read a JSON document from `path`, or from stdin when `path` is `-`.
pub(crate) fn read_value(path: &Path) -> Result<Value> {
	let raw = if path.as_os_str() == "-" {
		let mut raw = Vec::new();
		std::io::stdin().read_to_end(&mut raw)?;
		raw
	} else {
		std::fs::read(path)?
	};
	debug!("read {} input bytes from {}", raw.len(), path.display());

	let parsed: serde_json::Value = serde_json::from_slice(&raw)?;
	Ok(Value::from(parsed))
}

/// Build validated encode options from CLI flags.
pub(crate) fn encode_options(float_precision: u8) -> Result<EncodeOptions> {
	let options = EncodeOptions {
		float_precision,
		..EncodeOptions::default()
	};
	options.validate()?;
	Ok(options)
}
