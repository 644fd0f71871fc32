//! Loading passes for bundled copies of the overlay registry.
//!
//! Every extension ships a [`ModuleCopy`]. Loading copies into one
//! [`OverlayContext`] installs the newest catalog and merges every copy's menus,
//! while proxies registered by any copy stay in place across reloads.

mod context;
mod error;
mod module;

pub use context::{LoadOutcome, OverlayContext};
pub use error::LoadError;
pub use module::ModuleCopy;
