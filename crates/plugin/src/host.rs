use emote_primitives::Message;
use emote_registry::DefinitionSet;

use crate::Envelope;

/// Outbound side of the host framework.
pub trait Host: Send + Sync {
	/// Publishes a full definition snapshot on the `emojis` channel.
	fn publish_definitions(&self, definitions: &DefinitionSet);

	/// Hands a processed message back to the host's message pipeline.
	fn deliver_message(&self, message: Message);

	/// Returns an envelope the plugin could not interpret. Dropped unless overridden.
	fn forward(&self, envelope: Envelope) {
		let _ = envelope;
	}
}
