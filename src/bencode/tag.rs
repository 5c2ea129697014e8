/// Resolved wire tag for one destination field.
///
/// Grammar: `name[,opt1,opt2,...]`. The wire name is the substring before the
/// first comma; an empty name falls back to the declared field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireTag {
	name: &'static str,
	options: TagOptions,
}

impl WireTag {
	/// Resolved wire name used for dictionary key matching.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Trailing comma-separated options.
	pub fn options(&self) -> TagOptions {
		self.options
	}
}

/// The option list following the wire name in a tag annotation, without the
/// leading comma.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagOptions(&'static str);

impl TagOptions {
	/// Report whether the comma-separated option list contains `option`
	/// by exact membership.
	pub fn contains(&self, option: &str) -> bool {
		if self.0.is_empty() {
			return false;
		}
		self.0.split(',').any(|candidate| candidate == option)
	}
}

/// Resolve a field's wire tag from its declared name and optional annotation.
///
/// An explicit annotation wins; `None` falls back to the declared name with
/// no options.
pub fn parse_tag(declared: &'static str, annotation: Option<&'static str>) -> WireTag {
	let Some(raw) = annotation else {
		return WireTag {
			name: declared,
			options: TagOptions(""),
		};
	};

	match raw.split_once(',') {
		Some((head, rest)) => WireTag {
			name: if head.is_empty() { declared } else { head },
			options: TagOptions(rest),
		},
		None => WireTag {
			name: if raw.is_empty() { declared } else { raw },
			options: TagOptions(""),
		},
	}
}
