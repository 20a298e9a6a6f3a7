//! Content tree model.
//!
//! A message body is a tree of [`ContentNode`]s. Text nodes are leaves; every
//! other node owns an ordered list of following nodes (`siblings`) that the
//! host renders after the node itself. Ownership is strictly tree-shaped, so
//! a rewritten copy can be produced by plain recursion.
//!
//! On the wire nodes are internally tagged by `"type"`:
//!
//! ```json
//! {"type": "root", "siblings": [
//!   {"type": "text", "text": "hello "},
//!   {"type": "image", "url": "http://…", "id": "wave", "name": "wave"}
//! ]}
//! ```

use serde::{Deserialize, Serialize};

/// One node of a message content tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentNode {
	Text(TextContent),
	Image(ImageContent),
	/// Generic container; also the wrapper produced when a text node is split.
	Root(RootContent),
}

/// Plain text leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
	pub text: String,
}

/// Inline image reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageContent {
	pub url: String,
	/// Identifier of the asset this image refers to.
	pub id: String,
	pub name: String,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub siblings: Vec<ContentNode>,
}

/// Ordered container of nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootContent {
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub siblings: Vec<ContentNode>,
}

impl ContentNode {
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text(TextContent { text: text.into() })
	}

	pub fn image(url: impl Into<String>, id: impl Into<String>, name: impl Into<String>) -> Self {
		Self::Image(ImageContent {
			url: url.into(),
			id: id.into(),
			name: name.into(),
			siblings: Vec::new(),
		})
	}

	pub fn root(siblings: Vec<ContentNode>) -> Self {
		Self::Root(RootContent { siblings })
	}

	/// Returns the text of a text leaf.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(t) => Some(&t.text),
			_ => None,
		}
	}

	/// Returns the following-node list, or `None` for text leaves which cannot carry one.
	pub fn siblings(&self) -> Option<&[ContentNode]> {
		match self {
			Self::Text(_) => None,
			Self::Image(img) => Some(&img.siblings),
			Self::Root(root) => Some(&root.siblings),
		}
	}

	/// Collects text leaves in document order (node first, then its siblings).
	pub fn text_fragments(&self) -> Vec<&str> {
		let mut out = Vec::new();
		self.collect_text(&mut out);
		out
	}

	/// Concatenation of every text leaf in document order.
	pub fn plain_text(&self) -> String {
		self.text_fragments().concat()
	}

	fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
		if let Self::Text(t) = self {
			out.push(&t.text);
			return;
		}
		for sibling in self.siblings().unwrap_or_default() {
			sibling.collect_text(out);
		}
	}
}

impl From<&str> for ContentNode {
	fn from(text: &str) -> Self {
		Self::text(text)
	}
}

#[cfg(test)]
mod tests;
