//! What one bundled copy of the crate brings to a loading pass.

use std::path::Path;

use overlay_menus::{MenuLayout, TopMenuLayout, layout};
use overlay_registry::{BUILTIN_COMMANDS, CommandSpec, Version};
use serde::Deserialize;

use crate::LoadError;

/// One bundled copy: its version, command catalog and desired menus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleCopy {
	pub version: Version,
	pub commands: Vec<CommandSpec>,
	pub layout: MenuLayout,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
	version: String,
	/// Prepends the builtin catalog to `commands`.
	#[serde(default)]
	include_builtin: bool,
	#[serde(default)]
	commands: Vec<CommandSpec>,
	#[serde(default)]
	menus: Vec<TopMenuLayout>,
}

impl ModuleCopy {
	pub fn new(version: Version, commands: Vec<CommandSpec>, layout: MenuLayout) -> Self {
		Self { version, commands, layout }
	}

	/// The copy compiled into this binary.
	pub fn builtin() -> Self {
		Self::new(Version::current(), BUILTIN_COMMANDS.to_vec(), layout::builtin_layout())
	}

	/// Parses a TOML manifest.
	///
	/// ```toml
	/// version = "1.4.0"
	/// include_builtin = true
	///
	/// [[commands]]
	/// slot = "liquify_tool"
	/// label = "Liquify"
	/// kind = "tool"
	/// native = "tool.liquify"
	///
	/// [[menus]]
	/// name = "tools"
	/// entries = ["transform_tool", "liquify_tool", "-"]
	/// ```
	pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
		let manifest: Manifest = toml::from_str(content)?;
		let version = Version::parse(&manifest.version)?;

		let mut commands = Vec::with_capacity(manifest.commands.len());
		if manifest.include_builtin {
			commands.extend(BUILTIN_COMMANDS.iter().cloned());
		}
		commands.extend(manifest.commands);

		Ok(Self::new(version, commands, MenuLayout::new(manifest.menus)))
	}

	pub fn from_path(path: &Path) -> Result<Self, LoadError> {
		let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&content)
	}
}
