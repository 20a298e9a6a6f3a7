use serde::{Deserialize, Serialize};

/// A registered emoji: identifier, display name, image location, and the pattern that triggers it.
///
/// Field names follow the `emojis` channel wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
	/// Unique key within a snapshot.
	pub id: String,
	/// Display name shown to users.
	pub name: String,
	pub image_url: String,
	/// Regular expression source. Empty means the definition never matches.
	#[serde(default)]
	pub regex: String,
}

impl Definition {
	pub fn new(
		id: impl Into<String>,
		name: impl Into<String>,
		image_url: impl Into<String>,
		regex: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			image_url: image_url.into(),
			regex: regex.into(),
		}
	}

	#[inline]
	pub fn display_name(&self) -> &str {
		&self.name
	}

	#[inline]
	pub fn pattern(&self) -> &str {
		&self.regex
	}

	/// True when the definition has a pattern worth compiling.
	#[inline]
	pub fn is_matchable(&self) -> bool {
		!self.regex.is_empty()
	}
}
