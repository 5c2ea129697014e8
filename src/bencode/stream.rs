use std::io::{ErrorKind, Read};

use crate::bencode::error::{DecodeError, Result};
use crate::bencode::parse::DecodeState;
use crate::bencode::populate::populate;
use crate::bencode::schema::Destination;

/// Smallest read chunk; also the fixed increment of the geometric growth.
const MIN_READ: usize = 512;

/// Incremental decoder over a blocking byte source.
///
/// Each [`decode`](Decoder::decode) call drains everything the source
/// currently has, parses exactly one value from the accumulated buffer, and
/// retains unconsumed trailing bytes for the next call. A value split across
/// reads is reassembled: the failed parse leaves the buffer untouched, so the
/// next call extends it and retries from the start.
///
/// The decoder may read past the value it returns; those bytes are not lost,
/// they seed the next call.
pub struct Decoder<R> {
	source: R,
	buf: Vec<u8>,
	/// Bytes of `buf` already parsed into a returned value; dropped by the
	/// next call's compaction.
	consumed: usize,
	/// Terminal source failure. Once set, every call replays it.
	failed: Option<DecodeError>,
}

impl<R: Read> Decoder<R> {
	/// Wrap a blocking byte source.
	pub fn new(source: R) -> Self {
		Self {
			source,
			buf: Vec::new(),
			consumed: 0,
			failed: None,
		}
	}

	/// Decode the next value from the source into `dest`.
	///
	/// End-of-input from the source only stops the fill; it is an error
	/// (`OutOfData`) only when the buffer holds no further value. Any other
	/// read failure is sticky: it is returned now, without parsing, and by
	/// every later call, without reading.
	///
	/// Parse failures are not sticky. A truncated value stays buffered and
	/// can complete on a later call once the source has more data.
	pub fn decode(&mut self, dest: &mut dyn Destination) -> Result<()> {
		if let Some(err) = &self.failed {
			return Err(err.clone());
		}

		self.compact();
		self.fill()?;

		if self.buf.is_empty() {
			return Err(DecodeError::OutOfData {
				at: 0,
				need: 1,
				rem: 0,
			});
		}

		let mut state = DecodeState::new(&self.buf);
		let value = state.next_value()?;
		self.consumed = state.offset();
		populate(&value, dest);
		Ok(())
	}

	/// Shift unconsumed trailing bytes to the front of the buffer.
	fn compact(&mut self) {
		if self.consumed > 0 {
			self.buf.drain(..self.consumed);
			self.consumed = 0;
		}
	}

	/// Greedily drain the source into the buffer's free tail until it
	/// reports end-of-input or fails.
	fn fill(&mut self) -> Result<()> {
		loop {
			if self.buf.capacity() - self.buf.len() < MIN_READ {
				self.grow();
			}
			let len = self.buf.len();
			self.buf.resize(self.buf.capacity(), 0);
			match self.source.read(&mut self.buf[len..]) {
				Ok(0) => {
					self.buf.truncate(len);
					return Ok(());
				}
				Ok(n) => self.buf.truncate(len + n),
				Err(err) if err.kind() == ErrorKind::Interrupted => self.buf.truncate(len),
				Err(err) => {
					self.buf.truncate(len);
					let failure = DecodeError::from(err);
					self.failed = Some(failure.clone());
					return Err(failure);
				}
			}
		}
	}

	/// Grow capacity to at least double plus the minimum chunk, so repeated
	/// fills amortize reallocation.
	fn grow(&mut self) {
		let want = self.buf.capacity() * 2 + MIN_READ;
		self.buf.reserve_exact(want - self.buf.len());
	}
}
