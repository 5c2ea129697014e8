#![allow(missing_docs)]

use bendec::bencode::{DecodeError, Destination, FieldBinding, Slot, decode_value, unmarshal};

#[derive(Debug, Default, PartialEq)]
struct Leaf {
	x: i64,
	s: String,
}

impl Destination for Leaf {
	fn fields(&mut self) -> Vec<FieldBinding<'_>> {
		let Self { x, s } = self;
		vec![
			FieldBinding::new("x", Some("x"), Slot::I64(x)),
			FieldBinding::new("s", None, Slot::Text(s)),
		]
	}
}

#[test]
fn unrecognized_value_tag_is_malformed() {
	let mut leaf = Leaf::default();
	let err = unmarshal(b"x", &mut leaf).unwrap_err();
	assert!(matches!(
		err,
		DecodeError::MalformedInput {
			at: 0,
			reason: "unrecognized value tag",
		}
	));
}

#[test]
fn unterminated_integer_is_malformed() {
	let err = decode_value(b"i42").unwrap_err();
	assert!(matches!(err, DecodeError::MalformedInput { .. }));
}

#[test]
fn unterminated_list_is_malformed() {
	let err = decode_value(b"li42e").unwrap_err();
	assert!(matches!(err, DecodeError::MalformedInput { .. }));
}

#[test]
fn unterminated_dictionary_is_malformed() {
	let mut leaf = Leaf::default();
	let err = unmarshal(b"d1:xi120e", &mut leaf).unwrap_err();
	assert!(matches!(err, DecodeError::MalformedInput { .. }));
}

#[test]
fn string_length_beyond_buffer_is_out_of_data() {
	let mut leaf = Leaf::default();
	let err = unmarshal(b"l20:shorte", &mut leaf).unwrap_err();
	assert!(matches!(err, DecodeError::OutOfData { need: 20, .. }));
}

#[test]
fn list_dictionary_key_is_rejected() {
	let err = decode_value(b"dli1eei2ee").unwrap_err();
	assert!(matches!(err, DecodeError::BadKeyType { kind: "list", .. }));
}

#[test]
fn dictionary_dictionary_key_is_rejected() {
	let err = decode_value(b"dd1:ki1eei2ee").unwrap_err();
	assert!(matches!(err, DecodeError::BadKeyType { kind: "dictionary", .. }));
}

#[test]
fn errors_leave_the_destination_usable_for_fresh_input() {
	let mut leaf = Leaf::default();
	assert!(unmarshal(b"l20:shorte", &mut leaf).is_err());
	assert_eq!(leaf, Leaf::default());

	unmarshal(b"d1:xi7e1:s2:oke", &mut leaf).expect("fresh input decodes");
	assert_eq!(
		leaf,
		Leaf {
			x: 7,
			s: "ok".into(),
		}
	);
}

#[test]
fn error_display_carries_offset_context() {
	let err = decode_value(b"10:abc").unwrap_err();
	let text = err.to_string();
	assert!(text.contains("out of data"), "unexpected display: {text}");
	assert!(text.contains("need 10"), "unexpected display: {text}");
}
