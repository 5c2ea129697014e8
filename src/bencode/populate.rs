use crate::bencode::schema::{Destination, FieldBinding, Slot};
use crate::bencode::value::{DictEntry, Value};

/// Copy one decoded value into a destination under the permissive-merge
/// policy: unmatched keys and shape-incompatible data are dropped silently,
/// never reported as errors.
pub(crate) fn populate(value: &Value, dest: &mut dyn Destination) {
	match value {
		Value::Dict(entries) => populate_from_dict(entries, dest),
		Value::List(items) => populate_from_list(items, dest),
		// Bare scalars have no field to land in; the permissive merge
		// drops them.
		_ => {}
	}
}

/// Keyed population: each pair is matched against the destination's wire
/// names, trying the key verbatim first and its lowercased form second.
fn populate_from_dict(entries: &[DictEntry], dest: &mut dyn Destination) {
	for entry in entries {
		let Some(slot) = take_match(dest.fields(), &entry.key) else {
			continue;
		};
		write_slot(&entry.value, slot);
	}
}

/// Positional population for a bare list: each element goes to the first
/// binding whose slot shape matches and which is still at its zero/default,
/// so fields fill in declaration order and receive at most one value.
fn populate_from_list(items: &[Value], dest: &mut dyn Destination) {
	for item in items {
		for binding in dest.fields() {
			if positional_match(item, binding.slot()) && binding.slot().is_vacant() {
				write_slot(item, binding.into_slot());
				break;
			}
		}
	}
}

fn take_match<'a>(mut bindings: Vec<FieldBinding<'a>>, key: &str) -> Option<Slot<'a>> {
	let lower_key = key.to_ascii_lowercase();
	for candidate in [key, lower_key.as_str()] {
		if let Some(pos) = bindings.iter().position(|binding| binding.matches_key(candidate)) {
			return Some(bindings.remove(pos).into_slot());
		}
	}
	None
}

/// Shapes eligible for positional fill. Nested destinations and generic
/// slots never match a bare list element.
fn positional_match(value: &Value, slot: &Slot<'_>) -> bool {
	matches!(
		(value, slot),
		(Value::I64(_), Slot::I64(_))
			| (Value::U64(_), Slot::U64(_))
			| (Value::F64(_), Slot::F64(_))
			| (Value::Text(_), Slot::Text(_))
			| (Value::List(_), Slot::Values(_))
			| (Value::List(_), Slot::TextList(_))
			| (Value::List(_), Slot::I64List(_))
	)
}

fn write_slot(value: &Value, slot: Slot<'_>) {
	match (value, slot) {
		(Value::I64(n), Slot::I64(dst)) => *dst = *n,
		(Value::U64(n), Slot::U64(dst)) => *dst = *n,
		(Value::F64(n), Slot::F64(dst)) => *dst = *n,
		(Value::Text(s), Slot::Text(dst)) => *dst = s.clone(),
		(Value::List(items), Slot::Values(dst)) => *dst = items.clone(),
		(Value::List(items), Slot::TextList(dst)) => {
			for item in items {
				if let Value::Text(s) = item {
					dst.push(s.clone());
				}
			}
		}
		(Value::List(items), Slot::I64List(dst)) => {
			for item in items {
				if let Value::I64(n) = item {
					dst.push(*n);
				}
			}
		}
		// Struct-in-struct: a dictionary recurses into a nested destination
		// regardless of depth. Lazy pointer fields allocate storage here,
		// on first write-through, and nowhere else.
		(Value::Dict(entries), Slot::Nested(nested)) => populate_from_dict(entries, nested),
		(Value::Dict(entries), Slot::NestedLazy(lazy)) => populate_from_dict(entries, lazy.materialize()),
		(other, Slot::Any(dst)) => *dst = other.clone(),
		// Shape mismatch: the field keeps its current state.
		_ => {}
	}
}
