//! Menu merging for command slots shared by several loading passes.
//!
//! Each loading pass requests a desired order of slots and separators per top
//! menu. Entries already materialized by an earlier pass are skipped; new ones
//! are spliced in after the entry that precedes them in the current pass when
//! the host supports indexed insertion, and appended otherwise.

mod backend;
mod engine;
mod entry;
mod error;
pub mod layout;
mod memory;

pub use backend::{MenuBackend, MenuItem};
pub use engine::{MenuEngine, PassReport};
pub use entry::MenuEntry;
pub use error::MenuError;
pub use layout::{LayoutEntry, MenuLayout, TopMenuLayout};
pub use memory::{MemoryBackend, MemoryItem, MemoryMenuId};
