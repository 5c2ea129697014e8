use crate::bencode::error::{DecodeError, Result};
use crate::bencode::populate::populate;
use crate::bencode::schema::Destination;
use crate::bencode::value::{DictEntry, Value};

/// Bounded cursor over one in-memory buffer, owned by a single decode call.
pub(crate) struct DecodeState<'a> {
	data: &'a [u8],
	off: usize,
}

impl<'a> DecodeState<'a> {
	pub(crate) fn new(data: &'a [u8]) -> Self {
		Self { data, off: 0 }
	}

	/// Current byte offset; after [`next_value`](Self::next_value) succeeds
	/// this is the end of the last fully-parsed value.
	pub(crate) fn offset(&self) -> usize {
		self.off
	}

	fn remaining(&self) -> usize {
		self.data.len().saturating_sub(self.off)
	}

	fn peek(&self) -> Option<u8> {
		self.data.get(self.off).copied()
	}

	/// Parse the next value, dispatching on one lookahead byte.
	pub(crate) fn next_value(&mut self) -> Result<Value> {
		let at = self.off;
		let Some(byte) = self.peek() else {
			return Err(DecodeError::OutOfData { at, need: 1, rem: 0 });
		};
		match byte {
			b'i' => self.parse_integer(),
			b'0'..=b'9' => self.parse_text().map(Value::Text),
			b'd' => {
				self.off += 1;
				self.parse_dictionary(at)
			}
			b'l' => {
				self.off += 1;
				self.parse_list(at)
			}
			_ => Err(DecodeError::MalformedInput {
				at,
				reason: "unrecognized value tag",
			}),
		}
	}

	/// `i<digits>e`, with the lexeme tried as i64, then u64, then f64.
	fn parse_integer(&mut self) -> Result<Value> {
		let at = self.off;
		self.off += 1;
		let lexeme_start = self.off;
		while self.off < self.data.len() && self.data[self.off] != b'e' {
			self.off += 1;
		}
		if self.off == self.data.len() {
			return Err(DecodeError::MalformedInput {
				at,
				reason: "unterminated integer",
			});
		}
		let lexeme = &self.data[lexeme_start..self.off];
		self.off += 1;

		let Ok(text) = std::str::from_utf8(lexeme) else {
			return Err(DecodeError::MalformedInput {
				at,
				reason: "integer could not be parsed",
			});
		};
		if let Ok(n) = text.parse::<i64>() {
			return Ok(Value::I64(n));
		}
		if let Ok(n) = text.parse::<u64>() {
			return Ok(Value::U64(n));
		}
		if let Ok(n) = text.parse::<f64>() {
			return Ok(Value::F64(n));
		}
		Err(DecodeError::MalformedInput {
			at,
			reason: "integer could not be parsed",
		})
	}

	/// `<decimallen>:<bytes>`, payload taken verbatim and exposed as text.
	fn parse_text(&mut self) -> Result<String> {
		let at = self.off;
		let mut len: usize = 0;
		loop {
			match self.peek() {
				None => {
					return Err(DecodeError::MalformedInput {
						at,
						reason: "unterminated string length",
					});
				}
				Some(b':') => break,
				Some(byte @ b'0'..=b'9') => {
					len = len
						.checked_mul(10)
						.and_then(|n| n.checked_add(usize::from(byte - b'0')))
						.ok_or(DecodeError::MalformedInput {
							at,
							reason: "string length out of range",
						})?;
					self.off += 1;
				}
				Some(_) => {
					return Err(DecodeError::MalformedInput {
						at,
						reason: "non-digit in string length",
					});
				}
			}
		}
		self.off += 1;

		if len > self.remaining() {
			return Err(DecodeError::OutOfData {
				at: self.off,
				need: len,
				rem: self.remaining(),
			});
		}
		let payload = &self.data[self.off..self.off + len];
		self.off += len;
		Ok(String::from_utf8_lossy(payload).into_owned())
	}

	/// `l<value>*e`, fully recursive: elements may be any value shape.
	fn parse_list(&mut self, at: usize) -> Result<Value> {
		let mut items = Vec::new();
		loop {
			match self.peek() {
				None => {
					return Err(DecodeError::MalformedInput {
						at,
						reason: "unterminated list",
					});
				}
				Some(b'e') => {
					self.off += 1;
					return Ok(Value::List(items));
				}
				Some(_) => items.push(self.next_value()?),
			}
		}
	}

	/// `d(<key><value>)*e`. Keys must be strings; integer keys are coerced
	/// to their decimal string form. Values recurse without a depth limit.
	fn parse_dictionary(&mut self, at: usize) -> Result<Value> {
		let mut entries = Vec::new();
		loop {
			match self.peek() {
				None => {
					return Err(DecodeError::MalformedInput {
						at,
						reason: "unterminated dictionary",
					});
				}
				Some(b'e') => {
					self.off += 1;
					return Ok(Value::Dict(entries));
				}
				Some(_) => {}
			}

			let key_at = self.off;
			let key = match self.next_value()? {
				Value::Text(s) => s,
				Value::I64(n) => n.to_string(),
				Value::U64(n) => n.to_string(),
				other => {
					return Err(DecodeError::BadKeyType {
						at: key_at,
						kind: other.kind(),
					});
				}
			};

			if matches!(self.peek(), None | Some(b'e')) {
				return Err(DecodeError::MalformedInput {
					at: key_at,
					reason: "dictionary key without a value",
				});
			}
			let value = self.next_value()?;
			entries.push(DictEntry { key, value });
		}
	}
}

/// Decode `data` into `dest`.
///
/// Every top-level value in the buffer is parsed and merged into `dest`
/// under the permissive policy: unknown keys and shape mismatches are
/// skipped, never fatal. Parsing stops at the end of the buffer or at a
/// stray terminator byte.
///
/// Fail-fast on structural errors: the first grammar violation is returned
/// and nothing past it is parsed. Values applied before the failure stay
/// applied, so `dest` may be partially populated on error.
pub fn unmarshal(data: &[u8], dest: &mut dyn Destination) -> Result<()> {
	let mut state = DecodeState::new(data);
	while !matches!(state.peek(), None | Some(b'e')) {
		let value = state.next_value()?;
		populate(&value, dest);
	}
	Ok(())
}

/// Decode exactly one value from `data` into a generic [`Value`] tree.
///
/// Empty input is [`DecodeError::OutOfData`]; bytes after the first complete
/// value are ignored.
pub fn decode_value(data: &[u8]) -> Result<Value> {
	let mut state = DecodeState::new(data);
	state.next_value()
}
