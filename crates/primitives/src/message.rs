use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ContentNode;

/// A chat message as delivered by the host.
///
/// Only [`Message::content`] is interpreted; every other field, including
/// ones this crate does not know about, is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub room_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub author_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub content: Option<ContentNode>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub created_at: Option<String>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl Message {
	/// Creates a message with only an author and a content tree.
	pub fn new(author_id: impl Into<String>, content: ContentNode) -> Self {
		Self {
			id: None,
			room_id: None,
			author_id: Some(author_id.into()),
			content: Some(content),
			created_at: None,
			extra: Map::new(),
		}
	}

	/// True when the message carries a non-empty author reference.
	pub fn has_author(&self) -> bool {
		self.author_id.as_deref().is_some_and(|id| !id.is_empty())
	}
}
