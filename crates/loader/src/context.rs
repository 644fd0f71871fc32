//! The shared state every bundled copy loads into.

use std::sync::Arc;

use overlay_menus::{MenuBackend, MenuEngine, MenuError, PassReport};
use overlay_registry::{
	Action, Activation, CommandCatalog, CommandHandle, CommandSlot, NativeHost, ProxyRegistry, RegistryError, Validation, Version,
	command_handles,
};
use tracing::{debug, info};

use crate::{LoadError, ModuleCopy};

/// Result of one loading pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
	/// The copy passed the version gate, redeclared the catalog and merged its menus.
	Installed { version: Version, menus: PassReport },
	/// A newer copy is already installed; nothing was touched.
	AlreadyLoaded { installed: Version, candidate: Version },
}

/// Process-wide override state, created once by the host and reused by every
/// loading pass.
///
/// The proxy registry outlives catalog redeclarations: proxies registered while
/// an older copy was installed keep firing after a newer copy loads.
pub struct OverlayContext<B: MenuBackend> {
	host: Arc<dyn NativeHost>,
	installed: Option<Version>,
	catalog: Arc<CommandCatalog>,
	registry: Arc<ProxyRegistry>,
	menus: MenuEngine<B>,
}

impl<B: MenuBackend> OverlayContext<B> {
	/// Empty context; every registration fails until a copy is loaded.
	pub fn new(backend: B, host: Arc<dyn NativeHost>) -> Self {
		let catalog = Arc::new(CommandCatalog::empty());
		Self {
			host,
			installed: None,
			menus: MenuEngine::new(backend, catalog.clone()),
			catalog,
			registry: Arc::new(ProxyRegistry::new()),
		}
	}

	/// Runs one loading pass for `module`.
	///
	/// Copies older than the installed version are skipped silently. Equal or
	/// newer copies redeclare the catalog and merge their menus; the installed
	/// version only ever moves forward. A copy whose layout names a slot it does
	/// not declare is rejected before any state changes.
	pub fn load(&mut self, module: &ModuleCopy) -> Result<LoadOutcome, LoadError> {
		let candidate = module.version;
		if let Some(installed) = self.installed
			&& installed.is_newer_than(candidate)
		{
			debug!(%installed, %candidate, "newer copy already installed; skipping load");
			return Ok(LoadOutcome::AlreadyLoaded { installed, candidate });
		}

		let catalog = Arc::new(CommandCatalog::new(module.commands.iter().cloned(), self.host.clone()));
		if let Some(unknown) = module.layout.slots().find(|slot| !catalog.is_known(slot)) {
			debug!(%candidate, slot = unknown, "layout names an undeclared slot; rejecting copy");
			return Err(MenuError::UnknownSlot(unknown.to_string()).into());
		}

		self.menus.set_catalog(catalog.clone());
		self.catalog = catalog;

		let menus = self.menus.apply_layout(&module.layout)?;

		let version = self.installed.map_or(candidate, |installed| installed.max(candidate));
		self.installed = Some(version);
		info!(%version, slots = self.catalog.len(), inserted = menus.inserted, "overlay module installed");

		Ok(LoadOutcome::Installed { version, menus })
	}

	pub fn installed_version(&self) -> Option<Version> {
		self.installed
	}

	pub fn catalog(&self) -> &Arc<CommandCatalog> {
		&self.catalog
	}

	pub fn registry(&self) -> &Arc<ProxyRegistry> {
		&self.registry
	}

	pub fn menus(&self) -> &MenuEngine<B> {
		&self.menus
	}

	pub fn menus_mut(&mut self) -> &mut MenuEngine<B> {
		&mut self.menus
	}

	/// Registers a proxy against the installed catalog.
	pub fn register(&self, slot: &str, validation: Option<Validation>, action: Option<Action>) -> Result<bool, RegistryError> {
		self.registry.register(&self.catalog, slot, validation, action)
	}

	pub fn register_fn<V>(&self, slot: &str, validation: V, action: Action) -> Result<bool, RegistryError>
	where
		V: Fn() -> bool + Send + Sync + 'static,
	{
		self.registry.register_fn(&self.catalog, slot, validation, action)
	}

	pub fn trigger(&self, slot: &str) -> bool {
		self.registry.trigger(slot)
	}

	/// Activates `slot` the way the host would: proxy first, native otherwise.
	pub fn activate(&self, slot: &str) -> Result<Activation, RegistryError> {
		if self.registry.trigger(slot) {
			return Ok(Activation::Proxied);
		}
		let native = self
			.catalog
			.default_action(slot)
			.ok_or_else(|| RegistryError::InvalidSlot(slot.to_string()))?;
		native();
		Ok(Activation::Native)
	}

	/// Drops every proxy. Debugging aid only.
	pub fn clear(&self) {
		self.registry.clear();
	}

	/// Installed catalog's slots in declaration order.
	pub fn command_slots(&self) -> Vec<CommandSlot> {
		self.catalog.command_slots()
	}

	/// Activation handles for every installed slot.
	pub fn commands(&self) -> Vec<CommandHandle> {
		command_handles(&self.catalog, &self.registry)
	}
}
