use std::fmt::{self, Write as _};

use crate::json::cursor::Cursor;
use crate::json::value::Number;

/// Largest integer magnitude the fixed-point fast path formats correctly.
pub const SMALL_INT_BOUND: i64 = 59_074;

/// Highest accepted significant-digit count for general float text.
pub const MAX_FLOAT_PRECISION: u8 = 17;

/// Byte length of the `null` literal.
pub(crate) const NULL_LEN: usize = 4;

// 4.28 fixed point: one integer nibble, five decimal fraction slots.
const FIXED_POINT_SCALE: u32 = (0x0fff_ffff + 10_000) / 10_000;

const SCRATCH_LEN: usize = 64;

/// Bounded stack buffer for `core::fmt` output.
pub(crate) struct Scratch {
	buf: [u8; SCRATCH_LEN],
	len: usize,
}

impl Scratch {
	pub(crate) fn new() -> Self {
		Self {
			buf: [0; SCRATCH_LEN],
			len: 0,
		}
	}

	fn clear(&mut self) {
		self.len = 0;
	}

	fn truncate(&mut self, len: usize) {
		self.len = self.len.min(len);
	}

	fn as_bytes(&self) -> &[u8] {
		&self.buf[..self.len]
	}
}

impl fmt::Write for Scratch {
	fn write_str(&mut self, s: &str) -> fmt::Result {
		let end = self.len + s.len();
		let dst = self.buf.get_mut(self.len..end).ok_or(fmt::Error)?;
		dst.copy_from_slice(s.as_bytes());
		self.len = end;
		Ok(())
	}
}

/// Encoded length of a number.
pub fn number_len(number: Number, precision: u8) -> usize {
	match number.as_exact_i64() {
		Some(int) => int_len(int),
		None => general_float(number.as_f64(), precision, &mut Scratch::new()).len(),
	}
}

/// Write a number, preferring the integral form when it is exact.
pub(crate) fn write_number(cursor: &mut Cursor<'_>, number: Number, precision: u8) {
	match number.as_exact_i64() {
		Some(int) => write_int(cursor, int),
		None => cursor.put_slice(general_float(number.as_f64(), precision, &mut Scratch::new())),
	}
}

/// Decimal length of `value`, including a leading minus sign.
pub fn int_len(value: i64) -> usize {
	let digits = value.unsigned_abs().checked_ilog10().map_or(1, |log| log as usize + 1);
	digits + usize::from(value < 0)
}

/// Write `value` in decimal, using the fast path inside the bound.
pub(crate) fn write_int(cursor: &mut Cursor<'_>, value: i64) {
	if (-SMALL_INT_BOUND..=SMALL_INT_BOUND).contains(&value) {
		write_small_int(cursor, value);
	} else {
		write_int_general(cursor, value);
	}
}

/// Fixed-point digit extraction for `|value| <= SMALL_INT_BOUND`.
///
/// Every digit is stored at the cursor; the cursor only moves once a
/// non-zero digit was seen, so leading zeros are overwritten. The last slot
/// always advances, which emits `0` for zero.
pub(crate) fn write_small_int(cursor: &mut Cursor<'_>, value: i64) {
	debug_assert!(value.unsigned_abs() <= SMALL_INT_BOUND as u64);

	if value < 0 {
		cursor.put(b'-');
	}

	let mut acc = value.unsigned_abs() as u32 * FIXED_POINT_SCALE;
	let mut seen = false;
	for (shift, mask) in [(28, 0x0fff_ffff_u32), (27, 0x07ff_ffff), (26, 0x03ff_ffff), (25, 0x01ff_ffff)] {
		let digit = (acc >> shift) as u8;
		cursor.poke(b'0' + digit);
		seen |= digit != 0;
		cursor.advance(usize::from(seen));
		acc = (acc & mask) * 5;
	}
	cursor.poke(b'0' + (acc >> 24) as u8);
	cursor.advance(1);
}

/// Plain decimal conversion for any `i64`.
pub(crate) fn write_int_general(cursor: &mut Cursor<'_>, value: i64) {
	let mut buffer = itoa::Buffer::new();
	cursor.put_slice(buffer.format(value).as_bytes());
}

/// Format `value` like C's `%.{precision}g` into `scratch`.
///
/// Non-finite input has no JSON representation and yields `null`.
pub(crate) fn general_float(value: f64, precision: u8, scratch: &mut Scratch) -> &[u8] {
	if !value.is_finite() {
		return b"null";
	}
	let precision = precision.clamp(1, MAX_FLOAT_PRECISION);
	match format_general(value, usize::from(precision), scratch) {
		Ok(()) => scratch.as_bytes(),
		Err(fmt::Error) => b"null",
	}
}

fn format_general(value: f64, precision: usize, scratch: &mut Scratch) -> fmt::Result {
	scratch.clear();
	write!(scratch, "{:.*e}", precision - 1, value)?;

	let text = scratch.as_bytes();
	let e_pos = text.iter().position(|byte| *byte == b'e').ok_or(fmt::Error)?;
	let exp: i32 = std::str::from_utf8(&text[e_pos + 1..])
		.map_err(|_| fmt::Error)?
		.parse()
		.map_err(|_| fmt::Error)?;

	if exp < -4 || exp >= precision as i32 {
		let mantissa_end = trim_fraction(&scratch.buf[..e_pos]);
		scratch.truncate(mantissa_end);
		let sign = if exp < 0 { '-' } else { '+' };
		write!(scratch, "e{sign}{:02}", exp.unsigned_abs())
	} else {
		scratch.clear();
		let decimals = (precision as i32 - 1 - exp) as usize;
		write!(scratch, "{:.*}", decimals, value)?;
		let end = trim_fraction(scratch.as_bytes());
		scratch.truncate(end);
		Ok(())
	}
}

/// Length of `text` without trailing fraction zeros and a dangling point.
fn trim_fraction(text: &[u8]) -> usize {
	if !text.contains(&b'.') {
		return text.len();
	}

	let mut end = text.len();
	while end > 0 && text[end - 1] == b'0' {
		end -= 1;
	}
	if end > 0 && text[end - 1] == b'.' {
		end -= 1;
	}
	end
}

#[cfg(test)]
mod tests;
