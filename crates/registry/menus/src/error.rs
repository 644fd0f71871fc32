use thiserror::Error;

/// Errors raised while driving a menu pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
	/// Slot is not part of the installed command catalog.
	#[error("unknown command slot in menu layout: {0}")]
	UnknownSlot(String),
	/// Handle was not produced by this engine.
	#[error("unknown menu handle: {0}")]
	UnknownMenu(String),
}
