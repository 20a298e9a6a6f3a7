//! Registry container with atomic snapshot publication.
//!
//! # Mental model
//!
//! * Readers pin an `Arc<Snapshot>` and resolve everything against that immutable view.
//! * Writers build a replacement snapshot and publish it with CAS.
//! * A failed CAS means another writer won first; the writer retries against the latest snapshot.
//!
//! # Invariants
//!
//! * Replacement is whole-snapshot: no definition from the previous set survives unless the new set carries it.
//! * Generations are strictly increasing across publications.
//! * A pinned snapshot stays valid after it has been replaced.
//!
//! # Lifecycle
//!
//! 1. Startup: [`Registry::new`] publishes an empty snapshot (generation 0).
//! 2. Sync: every definitions update calls [`Registry::replace`].
//! 3. Read: message rewriting calls [`Registry::snapshot`] once per message.

use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::info;

use crate::{DefinitionSet, Snapshot};

pub struct Registry {
	snap: ArcSwap<Snapshot>,
}

impl Registry {
	pub fn new() -> Self {
		Self {
			snap: ArcSwap::from_pointee(Snapshot::new(Arc::default(), 0)),
		}
	}

	/// Pins the current snapshot. Keep the returned `Arc` for the whole operation.
	#[inline]
	pub fn snapshot(&self) -> Arc<Snapshot> {
		self.snap.load_full()
	}

	/// Runs `f` against the current snapshot without cloning the `Arc`.
	pub fn with_snapshot<R>(&self, f: impl FnOnce(&Snapshot) -> R) -> R {
		let snap = self.snap.load();
		f(&snap)
	}

	/// Atomically installs `definitions` as the new full snapshot and returns it.
	pub fn replace(&self, definitions: DefinitionSet) -> Arc<Snapshot> {
		let definitions = Arc::new(definitions);
		loop {
			let cur = self.snap.load_full();
			let next = Arc::new(Snapshot::new(Arc::clone(&definitions), cur.generation() + 1));
			let prev = self.snap.compare_and_swap(&cur, Arc::clone(&next));
			if Arc::ptr_eq(&prev, &cur) {
				info!(
					generation = next.generation(),
					definitions = next.definitions().len(),
					"installed emoji snapshot"
				);
				return next;
			}
		}
	}

	#[inline]
	pub fn generation(&self) -> u64 {
		self.snap.load().generation()
	}

	pub fn len(&self) -> usize {
		self.snap.load().definitions().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Default for Registry {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests;
