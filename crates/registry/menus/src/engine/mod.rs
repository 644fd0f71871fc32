//! Ordered, duplicate-free menu merging.
//!
//! For every menu handle the engine tracks two lists:
//!
//! - **committed**: entries materialized in the host so far, in logical order.
//!   It only grows; a slot appears at most once and separators never touch.
//! - **pending**: the order requested by the current pass, reset whenever the
//!   pass fetches the menu through [`MenuEngine::get_or_create_top_menu`].
//!
//! The committed list is kept in logical order even on append-only hosts so
//! later passes compute indices relative to the intended layout.

use std::sync::Arc;

use indexmap::IndexMap;
use overlay_registry::CommandCatalog;
use rustc_hash::{FxBuildHasher, FxHashMap as HashMap};
use tracing::{debug, trace};

use crate::{LayoutEntry, MenuBackend, MenuEntry, MenuError, MenuItem, MenuLayout};

/// Title of the shared root container.
pub const ROOT_TITLE: &str = "Overlay";

#[derive(Debug, Default, Clone)]
struct MenuState {
	committed: Vec<MenuEntry>,
	pending: Vec<MenuEntry>,
}

/// Counts of what one pass did to the menus.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PassReport {
	/// Entries materialized in the host.
	pub inserted: usize,
	/// Entries already committed by an earlier pass.
	pub skipped: usize,
	/// Separators materialized in the host.
	pub separators: usize,
	/// Separators collapsed or dropped.
	pub separators_dropped: usize,
}

/// Merges per-pass menu layouts into host menus without duplicates or doubled separators.
pub struct MenuEngine<B: MenuBackend> {
	backend: B,
	catalog: Arc<CommandCatalog>,
	indexed_insert: bool,
	root: Option<B::Handle>,
	top_menus: IndexMap<Box<str>, B::Handle, FxBuildHasher>,
	states: HashMap<B::Handle, MenuState>,
}

impl<B: MenuBackend> MenuEngine<B> {
	/// Wraps `backend`, probing once whether it supports indexed insertion.
	pub fn new(backend: B, catalog: Arc<CommandCatalog>) -> Self {
		let indexed_insert = backend.supports_indexed_insert();
		debug!(indexed_insert, "menu engine created");
		Self {
			backend,
			catalog,
			indexed_insert,
			root: None,
			top_menus: IndexMap::default(),
			states: HashMap::default(),
		}
	}

	/// Replaces the catalog used to validate and label new entries.
	///
	/// Entries committed under an earlier catalog stay in place.
	pub fn set_catalog(&mut self, catalog: Arc<CommandCatalog>) {
		self.catalog = catalog;
	}

	pub fn catalog(&self) -> &Arc<CommandCatalog> {
		&self.catalog
	}

	pub fn backend(&self) -> &B {
		&self.backend
	}

	pub fn supports_indexed_insert(&self) -> bool {
		self.indexed_insert
	}

	pub fn root(&self) -> Option<B::Handle> {
		self.root
	}

	pub fn top_menu(&self, name: &str) -> Option<B::Handle> {
		self.top_menus.get(name).copied()
	}

	/// Top menu names in creation order.
	pub fn top_menu_names(&self) -> impl Iterator<Item = &str> {
		self.top_menus.keys().map(|name| &**name)
	}

	pub fn committed(&self, menu: B::Handle) -> Option<&[MenuEntry]> {
		self.states.get(&menu).map(|s| s.committed.as_slice())
	}

	pub fn pending(&self, menu: B::Handle) -> Option<&[MenuEntry]> {
		self.states.get(&menu).map(|s| s.pending.as_slice())
	}

	/// Returns the top menu `name`, creating it (and the shared root) on first use.
	///
	/// Starts a new pass for that menu by clearing its pending sequence.
	pub fn get_or_create_top_menu(&mut self, name: &str, title: &str) -> B::Handle {
		let root = match self.root {
			Some(root) => root,
			None => {
				let root = self.backend.create_root(ROOT_TITLE);
				self.root = Some(root);
				root
			}
		};

		let menu = match self.top_menus.get(name) {
			Some(&menu) => menu,
			None => {
				let menu = self.backend.create_menu(root, name, title);
				self.top_menus.insert(Box::from(name), menu);
				debug!(name, "top menu created");
				menu
			}
		};

		self.states.entry(menu).or_default().pending.clear();
		menu
	}

	/// Adds `slot` to `menu` unless already committed.
	///
	/// Returns whether a host entry was materialized.
	pub fn add_entry(&mut self, menu: B::Handle, slot: &str) -> Result<bool, MenuError> {
		let (catalog_slot, spec) = self.catalog.get(slot).ok_or_else(|| MenuError::UnknownSlot(slot.to_string()))?;
		let state = self.states.get_mut(&menu).ok_or_else(|| MenuError::UnknownMenu(format!("{menu:?}")))?;
		let entry = MenuEntry::Slot(catalog_slot.clone());

		if state.committed.contains(&entry) {
			trace!(slot, "menu entry already committed");
			state.pending.push(entry);
			return Ok(false);
		}

		let index = insertion_index(state);
		let item = MenuItem {
			slot: catalog_slot,
			label: &spec.label,
			kind: spec.kind,
		};

		if self.indexed_insert {
			self.backend.insert_item(menu, index, item);
		} else {
			self.backend.append_item(menu, item);
		}
		trace!(slot, index, indexed = self.indexed_insert, "menu entry materialized");

		state.committed.insert(index, entry.clone());
		state.pending.push(entry);
		Ok(true)
	}

	/// Adds a separator at the tail of `menu` when it can be placed unambiguously.
	///
	/// Returns whether a host separator was materialized. Separators are never
	/// doubled, and are dropped when the preceding entry of this pass is not the
	/// committed tail.
	pub fn add_separator(&mut self, menu: B::Handle) -> Result<bool, MenuError> {
		let state = self.states.get_mut(&menu).ok_or_else(|| MenuError::UnknownMenu(format!("{menu:?}")))?;

		let placeable = !state.pending.last().is_some_and(MenuEntry::is_separator)
			&& !state.committed.last().is_some_and(MenuEntry::is_separator)
			&& state.pending.last() == state.committed.last();

		if !placeable {
			trace!(?menu, "separator dropped");
			state.pending.push(MenuEntry::Separator);
			return Ok(false);
		}

		self.backend.append_separator(menu);
		state.committed.push(MenuEntry::Separator);
		state.pending.push(MenuEntry::Separator);
		Ok(true)
	}

	/// Committed index the next entry of the current pass would land at.
	pub fn compute_insertion_index(&self, menu: B::Handle) -> Result<usize, MenuError> {
		self.states
			.get(&menu)
			.map(insertion_index)
			.ok_or_else(|| MenuError::UnknownMenu(format!("{menu:?}")))
	}

	/// Runs one pass over every top menu of `layout`.
	pub fn apply_layout(&mut self, layout: &MenuLayout) -> Result<PassReport, MenuError> {
		let mut report = PassReport::default();

		for top in &layout.menus {
			let menu = self.get_or_create_top_menu(&top.name, top.display_title());
			for entry in &top.entries {
				match entry {
					LayoutEntry::Command(slot) => {
						if self.add_entry(menu, slot)? {
							report.inserted += 1;
						} else {
							report.skipped += 1;
						}
					}
					LayoutEntry::Separator => {
						if self.add_separator(menu)? {
							report.separators += 1;
						} else {
							report.separators_dropped += 1;
						}
					}
				}
			}
		}

		debug!(?report, "menu pass applied");
		Ok(report)
	}
}

/// Index just past the committed position of the entry preceding this point
/// in the pending sequence, or the committed length when there is none.
fn insertion_index(state: &MenuState) -> usize {
	let committed = &state.committed;
	let mut after_separator = false;

	let prev = state.pending.iter().rev().find_map(|entry| match entry {
		MenuEntry::Separator => {
			after_separator = true;
			None
		}
		MenuEntry::Slot(slot) => Some(slot),
	});
	let Some(prev) = prev else {
		return committed.len();
	};

	let Some(pos) = committed.iter().position(|entry| entry.slot() == Some(prev)) else {
		return committed.len();
	};

	let mut index = pos + 1;
	// Step past a separator only when one was committed there; a dropped
	// separator must not push the entry beyond its neighbor.
	if after_separator && committed.get(index).is_some_and(MenuEntry::is_separator) {
		index += 1;
	}
	index.min(committed.len())
}
