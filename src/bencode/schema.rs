use crate::bencode::tag::{WireTag, parse_tag};
use crate::bencode::value::Value;

/// A typed destination that exposes its fields for population.
///
/// Implementations hand out one [`FieldBinding`] per field, in declaration
/// order. Because every binding borrows a distinct field, implementations
/// destructure `self` to obtain disjoint mutable borrows:
///
/// ```
/// use bendec::bencode::{Destination, FieldBinding, Slot};
///
/// #[derive(Default)]
/// struct Peer {
///     id: String,
///     port: i64,
/// }
///
/// impl Destination for Peer {
///     fn fields(&mut self) -> Vec<FieldBinding<'_>> {
///         let Self { id, port } = self;
///         vec![
///             FieldBinding::new("id", None, Slot::Text(id)),
///             FieldBinding::new("port", None, Slot::I64(port)),
///         ]
///     }
/// }
/// ```
pub trait Destination {
	/// Borrow one binding per field, in declaration order.
	///
	/// Bindings are rebuilt for each use and discarded afterwards; nothing is
	/// cached across decode calls.
	fn fields(&mut self) -> Vec<FieldBinding<'_>>;
}

/// A nested destination behind a nil-able pointer field.
///
/// Storage is allocated the first time the populator writes through the
/// field; unmatched fields stay unallocated.
pub trait LazyDestination {
	/// Report whether storage has not been allocated yet.
	fn is_unallocated(&self) -> bool;

	/// Allocate storage if needed and return the pointee as a destination.
	fn materialize(&mut self) -> &mut dyn Destination;
}

impl<T: Destination + Default> LazyDestination for Option<Box<T>> {
	fn is_unallocated(&self) -> bool {
		self.is_none()
	}

	fn materialize(&mut self) -> &mut dyn Destination {
		&mut **self.get_or_insert_with(Box::default)
	}
}

/// One entry of a destination's field-descriptor table: resolved wire tag,
/// its precomputed lowercased name, and a typed accessor for the field.
pub struct FieldBinding<'a> {
	tag: WireTag,
	lower: String,
	slot: Slot<'a>,
}

impl<'a> FieldBinding<'a> {
	/// Build a binding from the declared field name, an optional tag
	/// annotation (`name[,opt,...]`), and the field's slot.
	pub fn new(declared: &'static str, annotation: Option<&'static str>, slot: Slot<'a>) -> Self {
		let tag = parse_tag(declared, annotation);
		let lower = tag.name().to_ascii_lowercase();
		Self { tag, lower, slot }
	}

	/// Resolved wire tag.
	pub fn tag(&self) -> WireTag {
		self.tag
	}

	/// Lowercased wire name, precomputed for key matching.
	pub fn lower_name(&self) -> &str {
		&self.lower
	}

	/// Report whether a dictionary key candidate matches this binding's wire
	/// name or its lowercased form.
	pub fn matches_key(&self, candidate: &str) -> bool {
		candidate == self.tag.name() || candidate == self.lower
	}

	/// Consume the binding, yielding its slot.
	pub fn into_slot(self) -> Slot<'a> {
		self.slot
	}

	/// Borrow the slot.
	pub fn slot(&self) -> &Slot<'a> {
		&self.slot
	}
}

/// Typed mutable accessor for one destination field.
pub enum Slot<'a> {
	/// Signed 64-bit integer field.
	I64(&'a mut i64),
	/// Unsigned 64-bit integer field.
	U64(&'a mut u64),
	/// Double-precision float field.
	F64(&'a mut f64),
	/// Text field.
	Text(&'a mut String),
	/// List field accepting any mix of value shapes.
	Values(&'a mut Vec<Value>),
	/// List field accepting only string elements; other shapes are dropped.
	TextList(&'a mut Vec<String>),
	/// List field accepting only signed integer elements; other shapes are
	/// dropped.
	I64List(&'a mut Vec<i64>),
	/// Generic field accepting any single decoded value.
	Any(&'a mut Value),
	/// Nested destination populated recursively from a dictionary.
	Nested(&'a mut dyn Destination),
	/// Nested destination behind a nil-able pointer, allocated on first
	/// write.
	NestedLazy(&'a mut dyn LazyDestination),
}

impl Slot<'_> {
	/// Report whether the field is still at its zero/default state.
	///
	/// Positional list population only writes into vacant slots, so each
	/// field receives at most one value.
	pub fn is_vacant(&self) -> bool {
		match self {
			Slot::I64(v) => **v == 0,
			Slot::U64(v) => **v == 0,
			Slot::F64(v) => **v == 0.0,
			Slot::Text(v) => v.is_empty(),
			Slot::Values(v) => v.is_empty(),
			Slot::TextList(v) => v.is_empty(),
			Slot::I64List(v) => v.is_empty(),
			Slot::NestedLazy(v) => v.is_unallocated(),
			Slot::Any(_) | Slot::Nested(_) => false,
		}
	}
}
