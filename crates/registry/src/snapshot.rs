//! Immutable published registry state.
//!
//! # Invariants
//!
//! - A `Snapshot` never changes after it has been published; replacing the
//!   registry publishes a new one.
//! - The compiled pattern table lists definitions in [`DefinitionSet`]
//!   iteration order, with empty and invalid patterns removed.

use std::sync::{Arc, OnceLock};

use regex::Regex;
use tracing::warn;

use crate::{Definition, DefinitionSet};

/// A definition whose pattern could not be compiled.
#[derive(Debug, Clone, thiserror::Error)]
#[error("definition {id:?} has invalid pattern {pattern:?}: {source}")]
pub struct PatternCompileError {
	pub id: String,
	pub pattern: String,
	#[source]
	pub source: regex::Error,
}

struct CompiledPattern {
	/// Position of the owning definition in the set.
	index: usize,
	regex: Regex,
}

#[derive(Default)]
struct PatternTable {
	compiled: Vec<CompiledPattern>,
	failures: Vec<PatternCompileError>,
}

impl PatternTable {
	fn build(definitions: &DefinitionSet) -> Self {
		let mut table = Self::default();
		for (index, def) in definitions.iter().enumerate() {
			if !def.is_matchable() {
				continue;
			}
			match Regex::new(def.pattern()) {
				Ok(regex) => table.compiled.push(CompiledPattern { index, regex }),
				Err(source) => {
					let err = PatternCompileError {
						id: def.id.clone(),
						pattern: def.regex.clone(),
						source,
					};
					warn!(id = %err.id, pattern = %err.pattern, error = %err.source, "skipping definition with invalid pattern");
					table.failures.push(err);
				}
			}
		}
		table
	}
}

/// One published registry state: the definitions plus their lazily compiled patterns.
pub struct Snapshot {
	definitions: Arc<DefinitionSet>,
	generation: u64,
	patterns: OnceLock<PatternTable>,
}

impl Snapshot {
	pub(crate) fn new(definitions: Arc<DefinitionSet>, generation: u64) -> Self {
		Self {
			definitions,
			generation,
			patterns: OnceLock::new(),
		}
	}

	/// Builds a standalone snapshot outside any [`crate::Registry`].
	pub fn from_definitions(definitions: DefinitionSet) -> Self {
		Self::new(Arc::new(definitions), 0)
	}

	#[inline]
	pub fn definitions(&self) -> &DefinitionSet {
		&self.definitions
	}

	/// Publication counter of the owning registry; 0 for the initial empty snapshot.
	#[inline]
	pub fn generation(&self) -> u64 {
		self.generation
	}

	fn table(&self) -> &PatternTable {
		self.patterns.get_or_init(|| PatternTable::build(&self.definitions))
	}

	/// Matchable definitions with their compiled pattern, in registry order.
	///
	/// Patterns are compiled on first use and shared by every later reader of
	/// this snapshot.
	pub fn patterns(&self) -> impl Iterator<Item = (&Definition, &Regex)> {
		self.table()
			.compiled
			.iter()
			.filter_map(|c| self.definitions.get_index(c.index).map(|def| (def, &c.regex)))
	}

	/// Definitions excluded from matching because their pattern failed to compile.
	pub fn compile_failures(&self) -> &[PatternCompileError] {
		&self.table().failures
	}
}

impl std::fmt::Debug for Snapshot {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Snapshot")
			.field("generation", &self.generation)
			.field("definitions", &self.definitions.len())
			.field("compiled", &self.patterns.get().is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests;
