mod error;
mod parse;
mod populate;
mod schema;
mod stream;
mod tag;
mod value;

/// Error and result aliases.
pub use error::{DecodeError, Result};
/// One-shot decode entry points.
pub use parse::{decode_value, unmarshal};
/// Destination schema types: field bindings and typed slots.
pub use schema::{Destination, FieldBinding, LazyDestination, Slot};
/// Incremental decoder over a blocking byte source.
pub use stream::Decoder;
/// Wire tag resolution types.
pub use tag::{TagOptions, WireTag, parse_tag};
/// Decoded runtime value types.
pub use value::{DictEntry, Value};
