use std::fmt;

use overlay_registry::CommandSlot;

/// One committed or requested menu position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MenuEntry {
	Slot(CommandSlot),
	/// Separators are indistinguishable from one another.
	Separator,
}

impl MenuEntry {
	pub fn is_separator(&self) -> bool {
		matches!(self, Self::Separator)
	}

	pub fn slot(&self) -> Option<&CommandSlot> {
		match self {
			Self::Slot(slot) => Some(slot),
			Self::Separator => None,
		}
	}
}

impl fmt::Display for MenuEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Slot(slot) => f.write_str(slot.as_str()),
			Self::Separator => f.write_str("-"),
		}
	}
}
