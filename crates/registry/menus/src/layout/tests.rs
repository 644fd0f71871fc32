use std::collections::HashSet;
use std::sync::Arc;

use overlay_registry::{CommandCatalog, CommandKind, NativeHost};
use pretty_assertions::assert_eq;

use super::*;

struct NullHost;

impl NativeHost for NullHost {
	fn run_native(&self, _kind: CommandKind, _native: &str) {}
}

#[test]
fn builtin_layout_only_references_builtin_slots() {
	let catalog = CommandCatalog::builtin(Arc::new(NullHost));
	for slot in builtin_layout().slots() {
		assert!(catalog.is_known(slot), "layout slot '{slot}' missing from builtin catalog");
	}
}

#[test]
fn builtin_layout_places_every_slot_once() {
	let catalog = CommandCatalog::builtin(Arc::new(NullHost));
	let layout = builtin_layout();
	let mut seen = HashSet::new();
	for slot in layout.slots() {
		assert!(seen.insert(slot), "slot '{slot}' appears twice in builtin layout");
	}
	assert_eq!(seen.len(), catalog.len());
}

#[test]
fn dash_is_a_separator() {
	let menu = TopMenuLayout::new("edit", "", ["undo", "-", "redo"]);
	assert_eq!(
		menu.entries,
		vec![LayoutEntry::Command("undo".into()), LayoutEntry::Separator, LayoutEntry::Command("redo".into())]
	);
	assert_eq!(menu.display_title(), "edit");
}

#[test]
fn deserializes_from_toml() {
	let layout: MenuLayout = toml::from_str(
		r#"
		[[menus]]
		name = "tools"
		title = "Tools"
		entries = ["move_tool", "-", "crop_tool"]

		[[menus]]
		name = "empty"
		"#,
	)
	.unwrap();

	assert_eq!(layout.menus.len(), 2);
	assert_eq!(layout.menus[0].entries[1], LayoutEntry::Separator);
	assert_eq!(layout.menus[0].display_title(), "Tools");
	assert!(layout.menus[1].entries.is_empty());
	assert_eq!(layout.slots().collect::<Vec<_>>(), ["move_tool", "crop_tool"]);
}

#[test]
fn rejects_unknown_fields() {
	let result: Result<MenuLayout, _> = toml::from_str(
		r#"
		[[menus]]
		name = "tools"
		colour = "red"
		"#,
	);
	assert!(result.is_err());
}
