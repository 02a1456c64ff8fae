//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

use jsonsize::json::{Member, Opaque, Value};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Seeded generator so failures reproduce.
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
	ChaCha20Rng::seed_from_u64(seed)
}

/// Build `count` random value trees from `seed`.
pub fn sample_trees(seed: u64, count: usize, budget: usize) -> Vec<Value> {
	let mut rng = seeded_rng(seed);
	(0..count).map(|_| random_value(&mut rng, budget)).collect()
}

/// Random value tree with roughly `budget` container levels.
pub fn random_value(rng: &mut impl Rng, budget: usize) -> Value {
	if budget == 0 || rng.random_bool(0.35) {
		return random_scalar(rng);
	}

	match rng.random_range(0..3) {
		0 => {
			let len = rng.random_range(0..6);
			Value::Array((0..len).map(|_| random_value(rng, budget - 1)).collect())
		}
		1 => {
			let len = rng.random_range(0..6);
			Value::Object((0..len).map(|idx| Member::new(random_key(rng, idx), random_value(rng, budget - 1))).collect())
		}
		_ => Value::Opaque(Opaque::new("Tagged", random_text(rng), random_value(rng, budget - 1))),
	}
}

/// Random leaf value, biased towards numbers near the fast-path bound.
pub fn random_scalar(rng: &mut impl Rng) -> Value {
	match rng.random_range(0..9) {
		0 => Value::Null,
		1 => Value::Undefined,
		2 => Value::Bool(rng.random_bool(0.5)),
		3 => Value::from(rng.random_range(-70_000_i64..=70_000)),
		4 => Value::from(rng.random::<i64>()),
		5 => Value::from(rng.random_range(-1.0e6..1.0e6_f64)),
		6 => Value::from(rng.random_range(-100_i64..100) as f64),
		7 => Value::from(rng.random::<f64>() * 1.0e-6),
		_ => Value::from(random_text(rng)),
	}
}

fn random_key(rng: &mut impl Rng, idx: usize) -> String {
	// distinct keys so parsed maps keep every entry
	format!("{idx}{}", random_text(rng))
}

fn random_text(rng: &mut impl Rng) -> String {
	const ALPHABET: &[char] = &['a', 'Z', '0', ' ', '"', '\\', '\n', '\t', '\u{1}', '\u{7f}', '\u{e9}', '\u{2603}', '\u{1f600}'];
	let len = rng.random_range(0..12);
	(0..len).map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())]).collect()
}
