use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Definition;

/// Ordered mapping from id to [`Definition`].
///
/// Iteration order is insertion order, which for a deserialized set is the
/// order keys appear in the payload. The matcher relies on this order to break
/// ties between patterns that start at the same offset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefinitionSet {
	entries: IndexMap<String, Definition>,
}

impl DefinitionSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts `def` under its id.
	///
	/// An existing entry with the same id is replaced in place and returned; its
	/// position in iteration order is kept.
	pub fn insert(&mut self, def: Definition) -> Option<Definition> {
		self.entries.insert(def.id.clone(), def)
	}

	/// Returns a copy of this set with `defs` appended. `self` is left untouched.
	pub fn with_added(&self, defs: impl IntoIterator<Item = Definition>) -> Self {
		let mut next = self.clone();
		for def in defs {
			next.insert(def);
		}
		next
	}

	#[inline]
	pub fn get(&self, id: &str) -> Option<&Definition> {
		self.entries.get(id)
	}

	#[inline]
	pub fn get_index(&self, index: usize) -> Option<&Definition> {
		self.entries.get_index(index).map(|(_, def)| def)
	}

	#[inline]
	pub fn contains(&self, id: &str) -> bool {
		self.entries.contains_key(id)
	}

	/// True when `id` is a key or the `id` field of any definition.
	///
	/// A synced payload may file a definition under a key that differs from its
	/// own `id`; both name assets, so both count as taken.
	pub fn is_taken(&self, id: &str) -> bool {
		self.contains(id) || self.entries.values().any(|def| def.id == id)
	}

	pub fn iter(&self) -> impl ExactSizeIterator<Item = &Definition> {
		self.entries.values()
	}

	pub fn ids(&self) -> impl ExactSizeIterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl FromIterator<Definition> for DefinitionSet {
	fn from_iter<I: IntoIterator<Item = Definition>>(iter: I) -> Self {
		Self::new().with_added(iter)
	}
}

impl<'a> IntoIterator for &'a DefinitionSet {
	type Item = &'a Definition;
	type IntoIter = indexmap::map::Values<'a, String, Definition>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.values()
	}
}
