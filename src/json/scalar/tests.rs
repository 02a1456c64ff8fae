use super::{SMALL_INT_BOUND, Scratch, general_float, int_len, number_len, write_int, write_int_general, write_number, write_small_int};
use crate::json::cursor::Cursor;
use crate::json::value::Number;

fn render(write: impl FnOnce(&mut Cursor<'_>)) -> String {
	let mut buf = [0_u8; 64];
	let mut cursor = Cursor::new(&mut buf);
	write(&mut cursor);
	String::from_utf8(cursor.written().to_vec()).expect("ascii output")
}

fn float_text(value: f64, precision: u8) -> String {
	let mut scratch = Scratch::new();
	String::from_utf8(general_float(value, precision, &mut scratch).to_vec()).expect("ascii output")
}

#[test]
fn small_int_fast_path_matches_std_across_bound() {
	for value in -SMALL_INT_BOUND..=SMALL_INT_BOUND {
		let fast = render(|cursor| write_small_int(cursor, value));
		assert_eq!(fast, value.to_string(), "fast path mismatch for {value}");
	}
}

#[test]
fn fast_and_general_paths_agree_at_the_boundary() {
	for value in [0, 1, -1, 9, 10, 40_924, 59_073, 59_074, 59_075, -59_074, -59_075, 100_000, -100_000, 200_000, 1_000_000, -1_000_000] {
		let dispatched = render(|cursor| write_int(cursor, value));
		let general = render(|cursor| write_int_general(cursor, value));
		assert_eq!(dispatched, general, "paths disagree for {value}");
		assert_eq!(dispatched.len(), int_len(value), "length mismatch for {value}");
	}
}

#[test]
fn zero_writes_single_digit() {
	assert_eq!(render(|cursor| write_small_int(cursor, 0)), "0");
	assert_eq!(int_len(0), 1);
}

#[test]
fn int_len_counts_sign_and_digits() {
	assert_eq!(int_len(7), 1);
	assert_eq!(int_len(-7), 2);
	assert_eq!(int_len(59_074), 5);
	assert_eq!(int_len(-100_000), 7);
	assert_eq!(int_len(i64::MAX), 19);
	assert_eq!(int_len(i64::MIN), 20);
	assert_eq!(render(|cursor| write_int(cursor, i64::MIN)), i64::MIN.to_string());
}

#[test]
fn general_float_follows_percent_g() {
	assert_eq!(float_text(0.5, 6), "0.5");
	assert_eq!(float_text(0.1, 6), "0.1");
	assert_eq!(float_text(-2.25, 6), "-2.25");
	assert_eq!(float_text(3.14159265, 6), "3.14159");
	assert_eq!(float_text(0.0001, 6), "0.0001");
	assert_eq!(float_text(0.00001, 6), "1e-05");
	assert_eq!(float_text(1234567.5, 6), "1.23457e+06");
	assert_eq!(float_text(123456.7, 6), "123457");
	assert_eq!(float_text(1.5e300, 6), "1.5e+300");
	assert_eq!(float_text(9.9999996, 6), "10");
}

#[test]
fn precision_is_clamped_and_round_trips_at_max() {
	assert_eq!(float_text(0.1, 0), float_text(0.1, 1));
	let value = 0.1 + 0.2;
	let text = float_text(value, 17);
	assert_eq!(text.parse::<f64>().expect("float parses"), value);
}

#[test]
fn non_finite_floats_render_null() {
	assert_eq!(float_text(f64::NAN, 6), "null");
	assert_eq!(float_text(f64::NEG_INFINITY, 6), "null");
	assert_eq!(number_len(Number::from_f64(f64::INFINITY), 6), 4);
}

#[test]
fn integral_float_uses_integer_text() {
	let number = Number::from_f64(2.0);
	assert_eq!(render(|cursor| write_number(cursor, number, 6)), "2");
	assert_eq!(number_len(number, 6), 1);
}

#[test]
fn number_len_matches_written_text() {
	for number in [
		Number::from_i64(-59_075),
		Number::from_i64(123_456_789),
		Number::from_f64(-0.000123),
		Number::from_f64(6.02e23),
		Number::from_f64(1e21),
	] {
		let text = render(|cursor| write_number(cursor, number, 6));
		assert_eq!(text.len(), number_len(number, 6), "length mismatch for {text}");
	}
}

#[test]
fn general_int_path_covers_extremes() {
	for value in [i64::MIN, i64::MIN + 1, -59_075, 59_075, i64::MAX] {
		let text = render(|cursor| write_int_general(cursor, value));
		assert_eq!(text, value.to_string());
		assert_eq!(text.len(), int_len(value));
	}
}
