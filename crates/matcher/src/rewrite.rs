use emote_primitives::{ContentNode, ImageContent};
use emote_registry::Snapshot;
use tracing::trace;

use crate::find_earliest_match;

/// Returns a copy of `node` with every text leaf annotated against `snapshot`.
///
/// * Text leaves are split by [`rewrite_text`]. A single fragment is returned
///   as is; several are wrapped in a `Root` node.
/// * Other nodes keep all of their own fields and get their sibling list
///   rewritten element by element. Image payloads are never scanned.
///
/// Callers pass one pinned snapshot for the whole tree so a concurrent
/// registry replace cannot be observed half-way through a message.
pub fn rewrite(node: &ContentNode, snapshot: &Snapshot) -> ContentNode {
	match node {
		ContentNode::Text(t) => {
			let mut parts = rewrite_text(&t.text, snapshot);
			if parts.len() <= 1 {
				return parts.pop().unwrap_or_else(|| node.clone());
			}
			ContentNode::root(parts)
		}
		ContentNode::Image(img) => ContentNode::Image(ImageContent {
			url: img.url.clone(),
			id: img.id.clone(),
			name: img.name.clone(),
			siblings: rewrite_all(&img.siblings, snapshot),
		}),
		ContentNode::Root(root) => ContentNode::root(rewrite_all(&root.siblings, snapshot)),
	}
}

fn rewrite_all(nodes: &[ContentNode], snapshot: &Snapshot) -> Vec<ContentNode> {
	nodes.iter().map(|node| rewrite(node, snapshot)).collect()
}

/// Splits `text` into text and image fragments in document order.
///
/// Joining the text of the returned text fragments reproduces `text` exactly.
/// An empty input yields no fragments.
pub fn rewrite_text(text: &str, snapshot: &Snapshot) -> Vec<ContentNode> {
	let mut parts = Vec::new();
	let mut rest = text;
	while !rest.is_empty() {
		let Some(m) = find_earliest_match(rest, snapshot) else {
			parts.push(ContentNode::text(rest));
			break;
		};
		if m.start > 0 {
			parts.push(ContentNode::text(&rest[..m.start]));
		}
		let def = m.definition;
		trace!(id = %def.id, start = m.start, end = m.end, "emoji matched");
		parts.push(ContentNode::image(def.image_url.as_str(), def.id.as_str(), def.display_name()));
		rest = &rest[m.end..];
	}
	parts
}
