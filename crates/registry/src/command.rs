//! Host-facing activation handles.

use std::fmt;
use std::sync::Arc;

use crate::{CommandCatalog, CommandSlot, DefaultAction, ProxyRegistry};

/// Which side handled an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
	/// A proxy binding matched and ran.
	Proxied,
	/// No proxy matched; the native action ran.
	Native,
}

/// Activatable command object handed to the host (shortcuts, menu clicks).
#[derive(Clone)]
pub struct CommandHandle {
	slot: CommandSlot,
	label: Arc<str>,
	registry: Arc<ProxyRegistry>,
	native: DefaultAction,
}

impl CommandHandle {
	pub fn slot(&self) -> &CommandSlot {
		&self.slot
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	/// Tries the slot's proxies, falling back to the native action.
	pub fn activate(&self) -> Activation {
		if self.registry.trigger(self.slot.as_str()) {
			Activation::Proxied
		} else {
			(self.native)();
			Activation::Native
		}
	}
}

impl fmt::Debug for CommandHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CommandHandle")
			.field("slot", &self.slot)
			.field("label", &self.label)
			.finish_non_exhaustive()
	}
}

/// One handle per catalog slot, in catalog order.
pub fn command_handles(catalog: &CommandCatalog, registry: &Arc<ProxyRegistry>) -> Vec<CommandHandle> {
	catalog
		.command_slots()
		.into_iter()
		.filter_map(|slot| {
			let spec = catalog.spec(slot.as_str())?;
			let native = catalog.default_action(slot.as_str())?.clone();
			Some(CommandHandle {
				label: Arc::from(&*spec.label),
				slot,
				registry: registry.clone(),
				native,
			})
		})
		.collect()
}
