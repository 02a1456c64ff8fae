use crate::json::cursor::Cursor;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Encoded length of a byte string, quotes and escapes included.
pub fn estimate_str(bytes: &[u8]) -> usize {
	2 + bytes.iter().map(|byte| escaped_len(*byte)).sum::<usize>()
}

/// Write `bytes` as a quoted JSON string.
///
/// Bytes at or above `0x80` are copied verbatim, so UTF-8 input stays UTF-8.
pub fn encode_str(cursor: &mut Cursor<'_>, bytes: &[u8]) {
	cursor.put(b'"');

	let mut start = 0;
	for (idx, byte) in bytes.iter().copied().enumerate() {
		if escaped_len(byte) == 1 {
			continue;
		}

		cursor.put_slice(&bytes[start..idx]);
		start = idx + 1;
		match short_escape(byte) {
			Some(code) => {
				cursor.put(b'\\');
				cursor.put(code);
			}
			None => {
				cursor.put_slice(b"\\u00");
				cursor.put(HEX[usize::from(byte >> 4)]);
				cursor.put(HEX[usize::from(byte & 0x0f)]);
			}
		}
	}

	cursor.put_slice(&bytes[start..]);
	cursor.put(b'"');
}

fn escaped_len(byte: u8) -> usize {
	match byte {
		_ if short_escape(byte).is_some() => 2,
		0x00..=0x1f | 0x7f => 6,
		_ => 1,
	}
}

fn short_escape(byte: u8) -> Option<u8> {
	match byte {
		b'"' => Some(b'"'),
		b'\\' => Some(b'\\'),
		0x08 => Some(b'b'),
		0x0c => Some(b'f'),
		b'\n' => Some(b'n'),
		b'\r' => Some(b'r'),
		b'\t' => Some(b't'),
		_ => None,
	}
}
