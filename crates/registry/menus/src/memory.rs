//! In-process menu host that records the materialized tree.

use std::fmt::Write as _;

use overlay_registry::{CommandKind, CommandSlot};

use crate::{MenuBackend, MenuItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemoryMenuId(u32);

/// Materialized entry of a [`MemoryBackend`] menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryItem {
	Command { slot: CommandSlot, label: String, kind: CommandKind },
	Separator,
	Submenu(MemoryMenuId),
}

#[derive(Debug)]
struct MemoryMenu {
	name: String,
	title: String,
	items: Vec<MemoryItem>,
}

/// Menu host keeping its tree in memory.
///
/// Built with [`new`](Self::new) it honors insertion indices; built with
/// [`append_only`](Self::append_only) it behaves like hosts whose menus can only
/// grow at the end.
#[derive(Debug)]
pub struct MemoryBackend {
	menus: Vec<MemoryMenu>,
	indexed_insert: bool,
	roots: Vec<MemoryMenuId>,
}

impl Default for MemoryBackend {
	fn default() -> Self {
		Self::new()
	}
}

impl MemoryBackend {
	pub fn new() -> Self {
		Self {
			menus: Vec::new(),
			indexed_insert: true,
			roots: Vec::new(),
		}
	}

	pub fn append_only() -> Self {
		Self {
			indexed_insert: false,
			..Self::new()
		}
	}

	/// Roots created so far.
	pub fn roots(&self) -> &[MemoryMenuId] {
		&self.roots
	}

	pub fn items(&self, menu: MemoryMenuId) -> &[MemoryItem] {
		self.menus.get(menu.0 as usize).map_or(&[][..], |m| m.items.as_slice())
	}

	pub fn title(&self, menu: MemoryMenuId) -> Option<&str> {
		self.menus.get(menu.0 as usize).map(|m| m.title.as_str())
	}

	/// Looks up a direct submenu of `parent` by name.
	pub fn submenu(&self, parent: MemoryMenuId, name: &str) -> Option<MemoryMenuId> {
		self.items(parent).iter().find_map(|item| match item {
			MemoryItem::Submenu(id) if self.menus.get(id.0 as usize).is_some_and(|m| m.name == name) => Some(*id),
			_ => None,
		})
	}

	/// Slot names and `-` for separators, in materialized order.
	pub fn entries(&self, menu: MemoryMenuId) -> Vec<String> {
		self.items(menu)
			.iter()
			.map(|item| match item {
				MemoryItem::Command { slot, .. } => slot.to_string(),
				MemoryItem::Separator => "-".to_string(),
				MemoryItem::Submenu(id) => format!("{}/", self.menus[id.0 as usize].name),
			})
			.collect()
	}

	/// Indented outline of every root and its submenus.
	pub fn render(&self) -> String {
		let mut out = String::new();
		for &root in &self.roots {
			self.render_menu(&mut out, root, 0);
		}
		out
	}

	fn render_menu(&self, out: &mut String, menu: MemoryMenuId, depth: usize) {
		let indent = "  ".repeat(depth);
		let _ = writeln!(out, "{indent}{}", self.menus[menu.0 as usize].title);
		for item in self.items(menu) {
			match item {
				MemoryItem::Command { slot, label, kind } => {
					let _ = writeln!(out, "{indent}  {label} [{kind}:{slot}]");
				}
				MemoryItem::Separator => {
					let _ = writeln!(out, "{indent}  ---");
				}
				MemoryItem::Submenu(id) => self.render_menu(out, *id, depth + 1),
			}
		}
	}

	fn push_menu(&mut self, name: &str, title: &str) -> MemoryMenuId {
		let id = MemoryMenuId(self.menus.len() as u32);
		self.menus.push(MemoryMenu {
			name: name.to_string(),
			title: title.to_string(),
			items: Vec::new(),
		});
		id
	}

	fn menu_mut(&mut self, menu: MemoryMenuId) -> &mut Vec<MemoryItem> {
		&mut self.menus[menu.0 as usize].items
	}
}

fn command(item: MenuItem<'_>) -> MemoryItem {
	MemoryItem::Command {
		slot: item.slot.clone(),
		label: item.label.to_string(),
		kind: item.kind,
	}
}

impl MenuBackend for MemoryBackend {
	type Handle = MemoryMenuId;

	fn create_root(&mut self, title: &str) -> MemoryMenuId {
		let id = self.push_menu(title, title);
		self.roots.push(id);
		id
	}

	fn create_menu(&mut self, parent: MemoryMenuId, name: &str, title: &str) -> MemoryMenuId {
		let id = self.push_menu(name, title);
		self.menu_mut(parent).push(MemoryItem::Submenu(id));
		id
	}

	fn supports_indexed_insert(&self) -> bool {
		self.indexed_insert
	}

	fn insert_item(&mut self, menu: MemoryMenuId, index: usize, item: MenuItem<'_>) {
		if !self.indexed_insert {
			return self.append_item(menu, item);
		}
		let items = self.menu_mut(menu);
		let index = index.min(items.len());
		items.insert(index, command(item));
	}

	fn append_item(&mut self, menu: MemoryMenuId, item: MenuItem<'_>) {
		self.menu_mut(menu).push(command(item));
	}

	fn append_separator(&mut self, menu: MemoryMenuId) {
		self.menu_mut(menu).push(MemoryItem::Separator);
	}
}
