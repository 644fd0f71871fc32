//! Shared command-override registry.
//!
//! Extensions bundling this crate register alternative handlers ("proxies") for a
//! closed set of native host commands. Activating a command runs the first proxy
//! whose validation currently holds, or the host's native action otherwise.
//!
//! # Modules
//!
//! - [`catalog`] - Known command slots and their native default actions
//! - [`proxy`] - Validation-gated alternative handlers per slot
//! - [`command`] - Host-facing activation handles
//! - [`version`] - Version gate deciding which bundled copy installs

pub mod catalog;
pub mod command;
mod error;
pub mod proxy;
mod slot;
pub mod version;

pub use catalog::{BUILTIN_COMMANDS, CommandCatalog, DefaultAction, NativeHost};
pub use command::{Activation, CommandHandle, command_handles};
pub use error::RegistryError;
pub use proxy::{Action, ActionId, ProxyBinding, ProxyRegistry, Validation};
pub use slot::{CommandKind, CommandSlot, CommandSpec};
pub use version::{VERSION, Version, newer_than};
