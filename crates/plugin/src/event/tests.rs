use serde_json::json;

use super::*;

fn decode(raw: Value) -> Result<PluginEvent, ProtocolError> {
	let envelope: Envelope = serde_json::from_value(raw).unwrap();
	PluginEvent::try_from(envelope)
}

#[test]
fn upload_paths_keep_order() {
	let event = decode(json!({"channel": "upload", "data": ["b.png", "a.png"]})).unwrap();
	assert_eq!(event, PluginEvent::Upload(vec!["b.png".into(), "a.png".into()]));
}

#[test]
fn malformed_upload_payload_is_a_protocol_error() {
	let err = decode(json!({"channel": "upload", "data": {"path": "a.png"}})).unwrap_err();
	assert_eq!(err.channel, Channel::Upload);
	assert!(err.to_string().starts_with("malformed upload payload"));
}

#[test]
fn sync_payloads_are_passed_through_raw() {
	let event = decode(json!({"channel": "emojis", "data": 42})).unwrap();
	assert_eq!(event, PluginEvent::Definitions(json!(42)));
}

#[test]
fn unknown_channel_fails_to_decode() {
	let raw = json!({"channel": "scenes", "data": {}});
	assert!(serde_json::from_value::<Envelope>(raw).is_err());
}

#[test]
fn envelope_serializes_lowercase_channel() {
	let envelope = Envelope::new(Channel::Emojis, json!({}));
	assert_eq!(serde_json::to_value(envelope).unwrap(), json!({"channel": "emojis", "data": {}}));
}
