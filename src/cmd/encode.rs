use std::io::Write;
use std::path::PathBuf;

use jsonsize::json::{Result, to_vec};

use crate::cmd::util::{encode_options, read_value};

/// Parse the input document and write it back as compact JSON.
pub fn run(path: PathBuf, float_precision: u8) -> Result<()> {
	let options = encode_options(float_precision)?;
	let value = read_value(&path)?;
	let bytes = to_vec(&value, &options);

	let mut stdout = std::io::stdout().lock();
	stdout.write_all(&bytes)?;
	stdout.write_all(b"\n")?;
	Ok(())
}
