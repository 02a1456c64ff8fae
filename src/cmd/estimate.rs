use std::path::PathBuf;

use jsonsize::json::{Result, serialize};
use serde::Serialize;

use crate::cmd::util::{encode_options, read_value};

/// Size report for one document.
#[derive(Debug, Serialize)]
pub struct SizeReport {
	/// Input path as given.
	pub path: String,
	/// Kind of the top-level value.
	pub root: &'static str,
	/// Estimator result.
	pub estimated: usize,
	/// Bytes actually written.
	pub written: usize,
	/// Reserved but unused bytes.
	pub slack: usize,
}

/// Estimate and encode the input, then print the sizes.
pub fn run(path: PathBuf, float_precision: u8, json: bool) -> Result<()> {
	let options = encode_options(float_precision)?;
	let value = read_value(&path)?;
	let out = serialize(&value, &options);

	let report = SizeReport {
		path: path.display().to_string(),
		root: value.kind(),
		estimated: out.estimated,
		written: out.bytes.len(),
		slack: out.slack(),
	};

	if json {
		println!("{}", serde_json::to_string(&report)?);
		return Ok(());
	}

	println!("path: {}", report.path);
	println!("root: {}", report.root);
	println!("estimated: {}", report.estimated);
	println!("written: {}", report.written);
	println!("slack: {}", report.slack);
	Ok(())
}
