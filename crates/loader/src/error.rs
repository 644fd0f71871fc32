use std::path::PathBuf;

use overlay_menus::MenuError;
use overlay_registry::RegistryError;
use thiserror::Error;

/// Errors raised by a loading pass or while reading a module manifest.
#[derive(Error, Debug)]
pub enum LoadError {
	#[error(transparent)]
	Registry(#[from] RegistryError),
	#[error(transparent)]
	Menu(#[from] MenuError),
	#[error("failed to read manifest {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("invalid manifest: {0}")]
	Manifest(#[from] toml::de::Error),
}
