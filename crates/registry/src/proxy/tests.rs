use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::{CommandKind, NativeHost};

struct NullHost;

impl NativeHost for NullHost {
	fn run_native(&self, _kind: CommandKind, _native: &str) {}
}

fn catalog() -> CommandCatalog {
	CommandCatalog::builtin(Arc::new(NullHost))
}

fn counting_action(counter: &Arc<AtomicUsize>) -> Action {
	let counter = counter.clone();
	Action::new(move || {
		counter.fetch_add(1, Ordering::SeqCst);
	})
}

#[test]
fn first_matching_binding_fires_once() {
	let catalog = catalog();
	let registry = ProxyRegistry::new();
	let a1 = Arc::new(AtomicUsize::new(0));
	let a2 = Arc::new(AtomicUsize::new(0));

	assert!(registry.register_fn(&catalog, "move_tool", || true, counting_action(&a1)).unwrap());
	assert!(registry.register_fn(&catalog, "move_tool", || false, counting_action(&a2)).unwrap());

	assert!(registry.trigger("move_tool"));
	assert_eq!(a1.load(Ordering::SeqCst), 1);
	assert_eq!(a2.load(Ordering::SeqCst), 0);
}

#[test]
fn earlier_registration_wins_when_both_match() {
	let catalog = catalog();
	let registry = ProxyRegistry::new();
	let b1 = Arc::new(AtomicUsize::new(0));
	let b2 = Arc::new(AtomicUsize::new(0));

	registry.register_fn(&catalog, "undo", || true, counting_action(&b1)).unwrap();
	registry.register_fn(&catalog, "undo", || true, counting_action(&b2)).unwrap();

	assert!(registry.trigger("undo"));
	assert!(registry.trigger("undo"));
	assert_eq!(b1.load(Ordering::SeqCst), 2);
	assert_eq!(b2.load(Ordering::SeqCst), 0);
}

#[test]
fn later_binding_fires_when_earlier_rejects() {
	let catalog = catalog();
	let registry = ProxyRegistry::new();
	let b2 = Arc::new(AtomicUsize::new(0));

	registry.register_fn(&catalog, "copy", || false, Action::new(|| panic!("rejected binding ran"))).unwrap();
	registry.register_fn(&catalog, "copy", || true, counting_action(&b2)).unwrap();

	assert!(registry.trigger("copy"));
	assert_eq!(b2.load(Ordering::SeqCst), 1);
}

#[test]
fn same_action_registers_once() {
	let catalog = catalog();
	let registry = ProxyRegistry::new();
	let counter = Arc::new(AtomicUsize::new(0));
	let action = counting_action(&counter);

	assert!(registry.register_fn(&catalog, "redo", || true, action.clone()).unwrap());
	assert!(!registry.register_fn(&catalog, "redo", || true, action).unwrap());
	assert_eq!(registry.binding_count("redo"), 1);
}

#[test]
fn named_actions_dedupe_across_closures() {
	let catalog = catalog();
	let registry = ProxyRegistry::new();

	assert!(registry.register_fn(&catalog, "paste", || true, Action::named("ext::paste", || {})).unwrap());
	assert!(!registry.register_fn(&catalog, "paste", || true, Action::named("ext::paste", || {})).unwrap());
	assert!(registry.register_fn(&catalog, "paste", || true, Action::named("other::paste", || {})).unwrap());
	assert_eq!(registry.binding_count("paste"), 2);
}

#[test]
fn same_action_may_bind_several_slots() {
	let catalog = catalog();
	let registry = ProxyRegistry::new();
	let action = Action::named("ext::zoom", || {});

	assert!(registry.register_fn(&catalog, "zoom_in", || true, action.clone()).unwrap());
	assert!(registry.register_fn(&catalog, "zoom_out", || true, action).unwrap());
	assert_eq!(registry.slots().len(), 2);
}

#[test]
fn trigger_without_bindings_evaluates_nothing() {
	let registry = ProxyRegistry::new();
	assert!(!registry.trigger("move_tool"));
	assert!(!registry.trigger("not_a_slot"));
}

#[test]
fn trigger_with_all_predicates_false() {
	let catalog = catalog();
	let registry = ProxyRegistry::new();
	let evaluated = Arc::new(AtomicUsize::new(0));
	let counter = Arc::new(AtomicUsize::new(0));

	for _ in 0..3 {
		let evaluated = evaluated.clone();
		registry
			.register_fn(
				&catalog,
				"crop_tool",
				move || {
					evaluated.fetch_add(1, Ordering::SeqCst);
					false
				},
				counting_action(&counter),
			)
			.unwrap();
	}

	assert!(!registry.trigger("crop_tool"));
	assert_eq!(evaluated.load(Ordering::SeqCst), 3);
	assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[test]
fn registration_errors() {
	let catalog = catalog();
	let registry = ProxyRegistry::new();
	let action = Action::new(|| {});

	assert_eq!(
		registry.register(&catalog, "nope", Some(Arc::new(|| true)), Some(action.clone())),
		Err(RegistryError::InvalidSlot("nope".into()))
	);
	assert_eq!(
		registry.register(&catalog, "undo", None, Some(action)),
		Err(RegistryError::InvalidValidation("undo".into()))
	);
	assert_eq!(
		registry.register(&catalog, "undo", Some(Arc::new(|| true)), None),
		Err(RegistryError::MissingAction("undo".into()))
	);
	assert!(registry.slots().is_empty());
}

#[test]
fn slot_check_precedes_other_checks() {
	let registry = ProxyRegistry::new();
	assert_eq!(
		registry.register(&catalog(), "nope", None, None),
		Err(RegistryError::InvalidSlot("nope".into()))
	);
}

#[test]
fn action_may_register_while_dispatching() {
	let catalog = Arc::new(catalog());
	let registry = Arc::new(ProxyRegistry::new());

	let inner_registry = registry.clone();
	let inner_catalog = catalog.clone();
	let action = Action::new(move || {
		inner_registry
			.register_fn(&inner_catalog, "redo", || true, Action::named("late::redo", || {}))
			.unwrap();
	});
	registry.register_fn(&catalog, "undo", || true, action).unwrap();

	assert!(registry.trigger("undo"));
	assert_eq!(registry.binding_count("redo"), 1);
}

#[test]
fn clear_drops_all_bindings() {
	let catalog = catalog();
	let registry = ProxyRegistry::new();
	registry.register_fn(&catalog, "undo", || true, Action::new(|| {})).unwrap();
	registry.register_fn(&catalog, "redo", || true, Action::new(|| {})).unwrap();

	registry.clear();

	assert!(registry.slots().is_empty());
	assert!(!registry.trigger("undo"));
}

#[test]
fn bindings_keep_registration_order() {
	let catalog = catalog();
	let registry = ProxyRegistry::new();
	registry.register_fn(&catalog, "undo", || true, Action::named("a", || {})).unwrap();
	registry.register_fn(&catalog, "undo", || true, Action::named("b", || {})).unwrap();

	let ids: Vec<String> = registry.bindings("undo").iter().map(|b| b.action().id().to_string()).collect();
	assert_eq!(ids, ["a", "b"]);
}
