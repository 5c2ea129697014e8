/// A decoded bencode value.
///
/// Integers wider than `i64` fall back to [`Value::U64`], and lexemes outside
/// both integer ranges fall back to [`Value::F64`]. Byte strings are exposed
/// as text; payloads that are not valid UTF-8 are converted lossily.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Signed 64-bit integer.
	I64(i64),
	/// Unsigned 64-bit integer that did not fit in `i64`.
	U64(u64),
	/// Double-precision fallback for lexemes outside both integer ranges.
	F64(f64),
	/// Length-prefixed byte string.
	Text(String),
	/// Ordered list of values, in wire order.
	List(Vec<Value>),
	/// Key/value pairs, in wire order.
	Dict(Vec<DictEntry>),
}

/// One dictionary pair as found on the wire.
///
/// Integer keys are coerced to their decimal string form during parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct DictEntry {
	/// Dictionary key.
	pub key: String,
	/// Paired value.
	pub value: Value,
}

impl Value {
	/// Short name of the value shape, for diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Value::I64(_) => "integer",
			Value::U64(_) => "unsigned integer",
			Value::F64(_) => "float",
			Value::Text(_) => "string",
			Value::List(_) => "list",
			Value::Dict(_) => "dictionary",
		}
	}
}
