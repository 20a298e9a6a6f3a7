//! Emoji definition registry.
//!
//! A [`Registry`] holds the current [`Snapshot`] of [`Definition`]s. Sync events
//! replace the whole snapshot at once; readers pin one snapshot and use it for
//! an entire operation, so a replacement is never observed half-way.

mod definition;
mod runtime;
mod set;
mod snapshot;

pub use definition::Definition;
pub use runtime::Registry;
pub use set::DefinitionSet;
pub use snapshot::{PatternCompileError, Snapshot};
