//! Command slot identifiers and their declarations.

use std::borrow::{Borrow, Cow};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Stable identifier of one overridable command (e.g. `move_tool`, `undo`).
///
/// Slots are handed out by a [`CommandCatalog`](crate::CommandCatalog); callers
/// refer to them by name and never mint new ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandSlot(Arc<str>);

impl CommandSlot {
	pub(crate) fn new(name: &str) -> Self {
		Self(Arc::from(name))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for CommandSlot {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for CommandSlot {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl PartialEq<str> for CommandSlot {
	fn eq(&self, other: &str) -> bool {
		&*self.0 == other
	}
}

impl PartialEq<&str> for CommandSlot {
	fn eq(&self, other: &&str) -> bool {
		&*self.0 == *other
	}
}

impl fmt::Display for CommandSlot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// What kind of native command a slot stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
	/// Activates a canvas tool.
	Tool,
	/// Runs a one-shot host action.
	#[default]
	Action,
}

impl fmt::Display for CommandKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Tool => f.write_str("tool"),
			Self::Action => f.write_str("action"),
		}
	}
}

/// Declaration of one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandSpec {
	/// Slot name used for registration and menu layouts.
	pub slot: Cow<'static, str>,
	/// Display label for menu items.
	pub label: Cow<'static, str>,
	/// Tool or action.
	#[serde(default)]
	pub kind: CommandKind,
	/// Host identifier of the native behavior.
	pub native: Cow<'static, str>,
}

impl CommandSpec {
	pub const fn new_static(slot: &'static str, label: &'static str, kind: CommandKind, native: &'static str) -> Self {
		Self {
			slot: Cow::Borrowed(slot),
			label: Cow::Borrowed(label),
			kind,
			native: Cow::Borrowed(native),
		}
	}
}
