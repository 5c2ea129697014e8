//! Public library API for decoding bencode data into generic value trees or
//! caller-supplied typed destinations.

/// Bencode parsing, field schemas, permissive population, and stream decoding.
pub mod bencode;
