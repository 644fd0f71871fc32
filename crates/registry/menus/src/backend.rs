use std::fmt::Debug;
use std::hash::Hash;

use overlay_registry::{CommandKind, CommandSlot};

/// Data needed by the host to materialize a command entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem<'a> {
	pub slot: &'a CommandSlot,
	pub label: &'a str,
	pub kind: CommandKind,
}

/// Host menu API as seen by the merge engine.
///
/// Handles are host-owned and only compared by identity.
pub trait MenuBackend {
	type Handle: Copy + Eq + Hash + Debug;

	/// Creates the shared root container. Called at most once per engine.
	fn create_root(&mut self, title: &str) -> Self::Handle;

	/// Creates a named submenu under `parent`.
	fn create_menu(&mut self, parent: Self::Handle, name: &str, title: &str) -> Self::Handle;

	/// Whether [`insert_item`](Self::insert_item) honors its index.
	///
	/// Queried once when the engine is built.
	fn supports_indexed_insert(&self) -> bool;

	fn insert_item(&mut self, menu: Self::Handle, index: usize, item: MenuItem<'_>);

	fn append_item(&mut self, menu: Self::Handle, item: MenuItem<'_>);

	fn append_separator(&mut self, menu: Self::Handle);
}
