//! Validation-gated alternative handlers per command slot.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use rustc_hash::FxHashMap as HashMap;
use tracing::{debug, trace};

use crate::{CommandCatalog, CommandSlot, RegistryError};

mod action;

pub use action::{Action, ActionId, Validation};

/// One registered (validation, action) pair under a slot.
pub struct ProxyBinding {
	slot: CommandSlot,
	validation: Validation,
	action: Action,
}

impl ProxyBinding {
	pub fn slot(&self) -> &CommandSlot {
		&self.slot
	}

	pub fn action(&self) -> &Action {
		&self.action
	}

	/// Evaluates the binding's validation.
	pub fn is_eligible(&self) -> bool {
		(self.validation)()
	}
}

impl fmt::Debug for ProxyBinding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ProxyBinding")
			.field("slot", &self.slot)
			.field("action", &self.action)
			.finish_non_exhaustive()
	}
}

#[derive(Clone, Default)]
struct ProxySnapshot {
	by_slot: HashMap<CommandSlot, Vec<Arc<ProxyBinding>>>,
}

/// Slot to ordered bindings; registration order is dispatch priority.
///
/// Readers load an immutable snapshot, so validations and actions run without
/// any lock held and may register further proxies themselves.
pub struct ProxyRegistry {
	snap: ArcSwap<ProxySnapshot>,
}

impl Default for ProxyRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl ProxyRegistry {
	pub fn new() -> Self {
		Self {
			snap: ArcSwap::from_pointee(ProxySnapshot::default()),
		}
	}

	/// Appends a binding under `slot`.
	///
	/// Returns `Ok(false)` without change when an action with the same identity
	/// is already bound to the slot.
	pub fn register(&self, catalog: &CommandCatalog, slot: &str, validation: Option<Validation>, action: Option<Action>) -> Result<bool, RegistryError> {
		let slot = catalog.resolve(slot).ok_or_else(|| RegistryError::InvalidSlot(slot.to_string()))?;
		let validation = validation.ok_or_else(|| RegistryError::InvalidValidation(slot.to_string()))?;
		let action = action.ok_or_else(|| RegistryError::MissingAction(slot.to_string()))?;

		let binding = Arc::new(ProxyBinding { slot, validation, action });

		loop {
			let cur = self.snap.load_full();

			let existing = cur.by_slot.get(&binding.slot).map_or(&[][..], Vec::as_slice);
			if existing.iter().any(|b| b.action == binding.action) {
				trace!(slot = %binding.slot, action = %binding.action.id(), "proxy already registered");
				return Ok(false);
			}

			let mut next = (*cur).clone();
			next.by_slot.entry(binding.slot.clone()).or_default().push(binding.clone());

			let prev = self.snap.compare_and_swap(&cur, Arc::new(next));
			if Arc::ptr_eq(&prev, &cur) {
				debug!(slot = %binding.slot, action = %binding.action.id(), "proxy registered");
				return Ok(true);
			}
		}
	}

	/// Registers a closure validation; shorthand for [`register`](Self::register).
	pub fn register_fn<V>(&self, catalog: &CommandCatalog, slot: &str, validation: V, action: Action) -> Result<bool, RegistryError>
	where
		V: Fn() -> bool + Send + Sync + 'static,
	{
		self.register(catalog, slot, Some(Arc::new(validation)), Some(action))
	}

	/// Runs the first binding of `slot` whose validation holds.
	///
	/// Returns false when the slot has no bindings (nothing is evaluated) or no
	/// validation holds. At most one action runs per call.
	pub fn trigger(&self, slot: &str) -> bool {
		let snap = self.snap.load_full();
		let Some(bindings) = snap.by_slot.get(slot) else {
			return false;
		};

		match bindings.iter().find(|b| b.is_eligible()) {
			Some(binding) => {
				trace!(slot, action = %binding.action.id(), "proxy matched");
				binding.action.invoke();
				true
			}
			None => false,
		}
	}

	/// Number of bindings registered under `slot`.
	pub fn binding_count(&self, slot: &str) -> usize {
		self.snap.load().by_slot.get(slot).map_or(0, Vec::len)
	}

	/// Bindings of `slot` in dispatch order.
	pub fn bindings(&self, slot: &str) -> Vec<Arc<ProxyBinding>> {
		self.snap.load().by_slot.get(slot).cloned().unwrap_or_default()
	}

	/// Slots holding at least one binding.
	pub fn slots(&self) -> Vec<CommandSlot> {
		let mut slots: Vec<CommandSlot> = self.snap.load().by_slot.keys().cloned().collect();
		slots.sort();
		slots
	}

	/// Drops every binding. Debugging aid only.
	pub fn clear(&self) {
		debug!("proxy registry cleared");
		self.snap.store(Arc::new(ProxySnapshot::default()));
	}
}

#[cfg(test)]
mod tests;
