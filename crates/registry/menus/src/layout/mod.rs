//! Desired menu order per loading pass.

use serde::{Deserialize, Serialize};

mod builtins;

pub use builtins::builtin_layout;

/// Token that denotes a separator in layouts.
pub const SEPARATOR: &str = "-";

/// One requested position in a top menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LayoutEntry {
	Command(String),
	Separator,
}

impl From<String> for LayoutEntry {
	fn from(value: String) -> Self {
		if value == SEPARATOR { Self::Separator } else { Self::Command(value) }
	}
}

impl From<&str> for LayoutEntry {
	fn from(value: &str) -> Self {
		if value == SEPARATOR {
			Self::Separator
		} else {
			Self::Command(value.to_string())
		}
	}
}

impl From<LayoutEntry> for String {
	fn from(entry: LayoutEntry) -> Self {
		match entry {
			LayoutEntry::Command(slot) => slot,
			LayoutEntry::Separator => SEPARATOR.to_string(),
		}
	}
}

/// Desired sequence for one named top menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopMenuLayout {
	pub name: String,
	/// Display title; the name is shown when empty.
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub entries: Vec<LayoutEntry>,
}

impl TopMenuLayout {
	pub fn new<I, E>(name: impl Into<String>, title: impl Into<String>, entries: I) -> Self
	where
		I: IntoIterator<Item = E>,
		E: Into<LayoutEntry>,
	{
		Self {
			name: name.into(),
			title: title.into(),
			entries: entries.into_iter().map(Into::into).collect(),
		}
	}

	pub fn display_title(&self) -> &str {
		if self.title.is_empty() { &self.name } else { &self.title }
	}
}

/// Ordered top menus requested by one module copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLayout {
	#[serde(default)]
	pub menus: Vec<TopMenuLayout>,
}

impl MenuLayout {
	pub fn new(menus: Vec<TopMenuLayout>) -> Self {
		Self { menus }
	}

	/// Every slot name referenced by the layout, in order of appearance.
	pub fn slots(&self) -> impl Iterator<Item = &str> {
		self.menus.iter().flat_map(|menu| {
			menu.entries.iter().filter_map(|entry| match entry {
				LayoutEntry::Command(slot) => Some(slot.as_str()),
				LayoutEntry::Separator => None,
			})
		})
	}
}

#[cfg(test)]
mod tests;
