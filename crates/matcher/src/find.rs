use emote_registry::{Definition, Snapshot};

/// Leftmost pattern occurrence found in a text span.
///
/// `start` and `end` are byte offsets into the searched text and always lie on
/// char boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch<'a> {
	pub definition: &'a Definition,
	pub start: usize,
	pub end: usize,
}

impl PatternMatch<'_> {
	#[inline]
	pub fn definition_id(&self) -> &str {
		&self.definition.id
	}
}

/// Finds the earliest occurrence of any pattern in `snapshot` within `text`.
///
/// Each pattern is searched once. The occurrence with the smallest start wins;
/// on equal starts the definition that comes first in registry order wins,
/// regardless of match length. Zero-width occurrences are ignored so callers
/// always make progress. Definitions with empty or invalid patterns never match.
pub fn find_earliest_match<'a>(text: &str, snapshot: &'a Snapshot) -> Option<PatternMatch<'a>> {
	let mut best: Option<PatternMatch<'a>> = None;
	for (definition, regex) in snapshot.patterns() {
		let Some(found) = regex.find_iter(text).find(|m| !m.is_empty()) else {
			continue;
		};
		if best.is_none_or(|b| found.start() < b.start) {
			best = Some(PatternMatch {
				definition,
				start: found.start(),
				end: found.end(),
			});
		}
	}
	best
}
