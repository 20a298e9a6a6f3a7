//! Identifier minting.
//!
//! Ids end up inside asset URLs, so they are restricted to ASCII letters and
//! digits. Collisions are resolved with numeric suffixes: `smile`, `smile1`,
//! `smile2`, …

/// Id used when a file name has no safe characters at all.
const FALLBACK_ID: &str = "emoji";

/// Reduces `name` to the characters allowed in an id.
pub fn sanitize_id(name: &str) -> String {
	let id: String = name.chars().filter(char::is_ascii_alphanumeric).collect();
	if id.is_empty() { FALLBACK_ID.to_owned() } else { id }
}

/// Returns `base` if free, otherwise the first `base{n}` (n = 1, 2, …) for which `taken` is false.
pub fn mint_id(base: &str, taken: impl Fn(&str) -> bool) -> String {
	if !taken(base) {
		return base.to_owned();
	}
	let mut n: u64 = 1;
	loop {
		let candidate = format!("{base}{n}");
		if !taken(&candidate) {
			return candidate;
		}
		n += 1;
	}
}
