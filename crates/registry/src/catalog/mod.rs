//! Closed set of known command slots and their native default actions.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use tracing::warn;

use crate::{CommandKind, CommandSlot, CommandSpec};

mod builtins;
mod macros;

pub use builtins::BUILTIN_COMMANDS;

/// Native behavior of a slot, run when no proxy matches.
pub type DefaultAction = Arc<dyn Fn() + Send + Sync>;

/// Host side of the native command API.
///
/// Each catalog slot's default action is a single call into this trait with the
/// slot's native identifier.
pub trait NativeHost: Send + Sync {
	fn run_native(&self, kind: CommandKind, native: &str);
}

struct CatalogEntry {
	spec: CommandSpec,
	default: DefaultAction,
}

/// Ordered mapping from slot to declaration and default action.
///
/// The dispatch table is built once at construction; lookups never go through
/// the host by name.
pub struct CommandCatalog {
	entries: IndexMap<CommandSlot, CatalogEntry, FxBuildHasher>,
}

impl CommandCatalog {
	/// Builds a catalog from declarations, binding each default action to `host`.
	///
	/// A slot declared twice keeps its first declaration.
	pub fn new<I>(specs: I, host: Arc<dyn NativeHost>) -> Self
	where
		I: IntoIterator<Item = CommandSpec>,
	{
		let mut entries: IndexMap<CommandSlot, CatalogEntry, FxBuildHasher> = IndexMap::default();

		for spec in specs {
			if entries.contains_key(&*spec.slot) {
				warn!(slot = %spec.slot, "duplicate command slot declaration ignored");
				continue;
			}

			let slot = CommandSlot::new(&spec.slot);
			let default = native_action(host.clone(), spec.kind, &spec.native);
			entries.insert(slot, CatalogEntry { spec, default });
		}

		Self { entries }
	}

	/// Catalog over [`BUILTIN_COMMANDS`].
	pub fn builtin(host: Arc<dyn NativeHost>) -> Self {
		Self::new(BUILTIN_COMMANDS.iter().cloned(), host)
	}

	/// Catalog with no slots; every registration against it fails.
	pub fn empty() -> Self {
		Self {
			entries: IndexMap::default(),
		}
	}

	pub fn is_known(&self, slot: &str) -> bool {
		self.entries.contains_key(slot)
	}

	/// Returns the catalog's slot for `name`, if known.
	pub fn resolve(&self, name: &str) -> Option<CommandSlot> {
		self.entries.get_key_value(name).map(|(slot, _)| slot.clone())
	}

	/// Slot and declaration for `name`, if known.
	pub fn get(&self, name: &str) -> Option<(&CommandSlot, &CommandSpec)> {
		self.entries.get_key_value(name).map(|(slot, entry)| (slot, &entry.spec))
	}

	pub fn spec(&self, slot: &str) -> Option<&CommandSpec> {
		self.entries.get(slot).map(|entry| &entry.spec)
	}

	pub fn default_action(&self, slot: &str) -> Option<&DefaultAction> {
		self.entries.get(slot).map(|entry| &entry.default)
	}

	/// Known slots in declaration order.
	pub fn command_slots(&self) -> Vec<CommandSlot> {
		self.entries.keys().cloned().collect()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&CommandSlot, &CommandSpec)> {
		self.entries.iter().map(|(slot, entry)| (slot, &entry.spec))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl fmt::Debug for CommandCatalog {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CommandCatalog")
			.field("slots", &self.entries.keys().collect::<Vec<_>>())
			.finish()
	}
}

fn native_action(host: Arc<dyn NativeHost>, kind: CommandKind, native: &str) -> DefaultAction {
	let native: Arc<str> = Arc::from(native);
	Arc::new(move || host.run_native(kind, &native))
}
