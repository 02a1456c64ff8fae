#![allow(missing_docs)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use jsonsize_testkit::fixture_path;
use serde_json::Value;

#[test]
fn encode_compacts_nested_fixture_in_input_order() {
	let output = run(&["encode", &fixture_path("nested.json").display().to_string()]);

	assert_eq!(
		String::from_utf8_lossy(&output.stdout).trim_end(),
		r#"{"a":[1,2,{"b":null}],"name":"jsonsize","tags":["fast","two-pass"],"empty":{"list":[],"map":{}}}"#
	);
}

#[test]
fn encode_formats_numbers_across_fast_path_bound() {
	let output = run(&["encode", &fixture_path("numbers.json").display().to_string()]);

	assert_eq!(
		String::from_utf8_lossy(&output.stdout).trim_end(),
		"[0,-1,59074,59075,-59074,-59075,2,0.5,3.14159,1e-07,1.84467e+19]"
	);
}

#[test]
fn estimate_json_report_has_no_underestimate() {
	let output = run(&["estimate", &fixture_path("nested.json").display().to_string(), "--json"]);
	let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be valid json");

	assert_eq!(json["root"], "object");
	let estimated = json["estimated"].as_u64().expect("estimated is a number");
	let written = json["written"].as_u64().expect("written is a number");
	assert!(written <= estimated, "estimate {estimated} below written {written}");
	assert_eq!(json["slack"].as_u64(), Some(estimated - written));
}

#[test]
fn encode_reads_stdin_when_path_is_dash() {
	let mut child = Command::new(env!("CARGO_BIN_EXE_jsonsize"))
		.args(["encode", "-"])
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("command spawns");
	child
		.stdin
		.take()
		.expect("stdin is piped")
		.write_all(b"{ \"k\" : [ 5, 2.0, \"x\" ] }")
		.expect("stdin accepts input");
	let output = child.wait_with_output().expect("command finishes");

	assert!(output.status.success(), "stdin encode failed: {}", String::from_utf8_lossy(&output.stderr));
	assert_eq!(String::from_utf8_lossy(&output.stdout).trim_end(), r#"{"k":[5,2,"x"]}"#);
}

#[test]
fn estimate_plain_report_lists_sizes() {
	let path = fixture_path("nested.json").display().to_string();
	let output = run(&["estimate", &path]);
	let text = String::from_utf8_lossy(&output.stdout);
	let lines: Vec<&str> = text.lines().collect();

	assert_eq!(lines.len(), 5, "unexpected report: {text}");
	assert_eq!(lines[0], format!("path: {path}"));
	assert_eq!(lines[1], "root: object");
	let field = |prefix: &str| -> u64 {
		lines
			.iter()
			.find_map(|line| line.strip_prefix(prefix))
			.and_then(|item| item.parse().ok())
			.unwrap_or_else(|| panic!("missing {prefix} line in {text}"))
	};
	let estimated = field("estimated: ");
	let written = field("written: ");
	assert_eq!(written, 96);
	assert_eq!(field("slack: "), estimated - written);
}

#[test]
fn invalid_precision_is_rejected() {
	let output = Command::new(env!("CARGO_BIN_EXE_jsonsize"))
		.args(["encode", &fixture_path("numbers.json").display().to_string(), "--float-precision", "0"])
		.output()
		.expect("command executes");

	assert!(!output.status.success(), "precision 0 should fail");
	assert!(String::from_utf8_lossy(&output.stderr).contains("invalid float precision"));
}

fn run(args: &[&str]) -> Output {
	let output = Command::new(env!("CARGO_BIN_EXE_jsonsize")).args(args).output().expect("command executes");

	assert!(
		output.status.success(),
		"command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	output
}
