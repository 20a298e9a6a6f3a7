use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;

use super::*;
use crate::Definition;

fn set_of(ids: &[&str]) -> DefinitionSet {
	ids.iter().map(|id| Definition::new(*id, *id, "u", *id)).collect()
}

#[test]
fn starts_empty() {
	let registry = Registry::new();
	assert!(registry.is_empty());
	assert_eq!(registry.generation(), 0);
}

/// Consecutive loads without a replace return the same snapshot.
#[test]
fn noop_snapshot_stability() {
	let registry = Registry::new();
	registry.replace(set_of(&["a"]));

	let before = registry.snapshot();
	let after = registry.snapshot();
	assert!(Arc::ptr_eq(&before, &after));
}

#[test]
fn replace_discards_previous_definitions() {
	let registry = Registry::new();
	registry.replace(set_of(&["a", "b"]));
	registry.replace(set_of(&["c"]));

	let snap = registry.snapshot();
	assert_eq!(snap.definitions().ids().collect::<Vec<_>>(), ["c"]);
	assert_eq!(snap.generation(), 2);
}

/// A pinned snapshot keeps its contents after the registry moves on.
#[test]
fn pinned_snapshot_survives_replace() {
	let registry = Registry::new();
	registry.replace(set_of(&["old"]));
	let pinned = registry.snapshot();

	registry.replace(set_of(&["new"]));

	assert!(pinned.definitions().contains("old"));
	assert!(!pinned.definitions().contains("new"));
	assert!(registry.with_snapshot(|snap| snap.definitions().contains("new")));
}

/// Readers racing a writer only ever see whole snapshots.
#[test]
fn concurrent_readers_see_consistent_sets() {
	let registry = Registry::new();
	let sets: Vec<DefinitionSet> = (0..50)
		.map(|round| {
			(0..8)
				.map(|i| Definition::new(format!("{round}-{i}"), format!("{round}"), "u", ""))
				.collect()
		})
		.collect();

	thread::scope(|scope| {
		for _ in 0..4 {
			scope.spawn(|| {
				for _ in 0..500 {
					let snap = registry.snapshot();
					let mut names = snap.definitions().iter().map(|d| d.display_name());
					if let Some(first) = names.next() {
						assert!(names.all(|name| name == first), "mixed snapshot observed");
					}
				}
			});
		}
		for set in &sets {
			registry.replace(set.clone());
		}
	});

	assert_eq!(registry.generation(), 50);
}
