use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors produced while decoding bencode data.
///
/// `Clone` is derived so the stream decoder can record a terminal source
/// failure once and replay it on every later call.
#[derive(Debug, Clone, Error)]
pub enum DecodeError {
	/// Input violated the bencode grammar.
	#[error("malformed input at offset {at}: {reason}")]
	MalformedInput {
		/// Byte offset where the violation was detected.
		at: usize,
		/// Short description of the grammar violation.
		reason: &'static str,
	},
	/// A declared length exceeded the remaining buffer, or no bytes remained
	/// at a value-start position.
	#[error("out of data at offset {at}: need {need} bytes, remaining {rem}")]
	OutOfData {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Dictionary key was neither a string nor an integer.
	#[error("bad dictionary key at offset {at}: got {kind}, expected string or integer")]
	BadKeyType {
		/// Byte offset of the offending key.
		at: usize,
		/// Shape of the decoded key value.
		kind: &'static str,
	},
	/// Destination was not a writable decode target.
	///
	/// The typed API takes `&mut` receivers, which prevents this statically;
	/// the variant remains part of the decode contract.
	#[error("destination is not a writable decode target")]
	InvalidTarget,
	/// The underlying byte source failed with something other than
	/// end-of-input. Sticky on the decoder that recorded it.
	#[error("source read failed: {msg}")]
	SourceReadFailure {
		/// Kind of the originating I/O error.
		kind: std::io::ErrorKind,
		/// Display form of the originating I/O error.
		msg: String,
	},
}

impl From<std::io::Error> for DecodeError {
	fn from(err: std::io::Error) -> Self {
		DecodeError::SourceReadFailure {
			kind: err.kind(),
			msg: err.to_string(),
		}
	}
}
