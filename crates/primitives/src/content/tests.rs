use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

#[test]
fn text_serializes_with_type_tag() {
	let json = serde_json::to_value(ContentNode::text("hi")).unwrap();
	assert_eq!(json, serde_json::json!({"type": "text", "text": "hi"}));
}

#[test]
fn image_without_siblings_omits_list() {
	let json = serde_json::to_value(ContentNode::image("http://x/a.png", "a", "alpha")).unwrap();
	assert_eq!(
		json,
		serde_json::json!({"type": "image", "url": "http://x/a.png", "id": "a", "name": "alpha"})
	);
}

#[test]
fn nested_tree_parses() {
	let raw = r#"{
		"type": "root",
		"siblings": [
			{"type": "text", "text": "a"},
			{"type": "image", "url": "u", "id": "i", "name": "n", "siblings": [{"type": "text", "text": "b"}]}
		]
	}"#;
	let node: ContentNode = serde_json::from_str(raw).unwrap();

	let mut image = ImageContent {
		url: "u".into(),
		id: "i".into(),
		name: "n".into(),
		siblings: Vec::new(),
	};
	image.siblings.push(ContentNode::text("b"));
	assert_eq!(node, ContentNode::root(vec![ContentNode::text("a"), ContentNode::Image(image)]));
}

#[test]
fn unknown_type_is_rejected() {
	let raw = r#"{"type": "video", "url": "u"}"#;
	assert!(serde_json::from_str::<ContentNode>(raw).is_err());
}

#[rstest]
#[case::leaf(ContentNode::text("abc"), "abc")]
#[case::image_only(ContentNode::image("u", "i", "ignored"), "")]
#[case::root(ContentNode::root(vec!["a".into(), ContentNode::image("u", "i", "n"), "b".into()]), "ab")]
fn plain_text_skips_image_payloads(#[case] node: ContentNode, #[case] expected: &str) {
	assert_eq!(node.plain_text(), expected);
}

#[test]
fn text_leaf_has_no_sibling_list() {
	let node = ContentNode::text("x");
	assert!(node.siblings().is_none());
	assert_eq!(ContentNode::root(Vec::new()).siblings(), Some(&[][..]));
}
