use pretty_assertions::assert_eq;
use serde_json::json;

use super::*;

async fn drive(input: &str) -> Vec<Value> {
	let output = serve(Config::default(), 4, input.as_bytes(), Vec::new()).await.unwrap();
	String::from_utf8(output)
		.unwrap()
		.lines()
		.map(|line| serde_json::from_str(line).unwrap())
		.collect()
}

#[tokio::test(flavor = "current_thread")]
async fn messages_are_annotated_after_a_definitions_sync() {
	let input = [
		json!({"channel": "emojis", "data": {"wave": {"id": "wave", "name": "wave", "image_url": "u", "regex": "o/"}}}),
		json!({"channel": "message", "data": {"id": "1", "author_id": "ann", "content": {"type": "text", "text": "hi o/"}}}),
	]
	.map(|v| v.to_string())
	.join("\n");

	let out = drive(&input).await;

	assert_eq!(
		out,
		[json!({"channel": "message", "data": {
			"id": "1",
			"author_id": "ann",
			"content": {"type": "root", "siblings": [
				{"type": "text", "text": "hi "},
				{"type": "image", "url": "u", "id": "wave", "name": "wave"},
			]},
		}})]
	);
}

#[tokio::test(flavor = "current_thread")]
async fn malformed_lines_are_skipped_and_undecodable_messages_echoed() {
	let input = [
		"not json".to_owned(),
		String::new(),
		json!({"channel": "scenes", "data": {}}).to_string(),
		json!({"channel": "message", "data": "opaque"}).to_string(),
		json!({"channel": "message", "data": {"id": "2", "content": {"type": "text", "text": "x"}}}).to_string(),
	]
	.join("\n");

	let out = drive(&input).await;

	assert_eq!(
		out,
		[
			json!({"channel": "message", "data": "opaque"}),
			json!({"channel": "message", "data": {"id": "2", "content": {"type": "text", "text": "x"}}}),
		]
	);
}

#[tokio::test(flavor = "current_thread")]
async fn empty_input_produces_no_output() {
	assert!(drive("").await.is_empty());
}
