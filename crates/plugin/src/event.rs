use std::fmt;
use std::path::PathBuf;

use emote_primitives::Message;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ProtocolError;

/// Host channels this plugin listens or publishes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
	/// Full definition snapshots.
	Emojis,
	Directories,
	Upload,
	Message,
}

impl fmt::Display for Channel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Emojis => "emojis",
			Self::Directories => "directories",
			Self::Upload => "upload",
			Self::Message => "message",
		})
	}
}

/// Wire envelope: `{"channel": "...", "data": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
	pub channel: Channel,
	#[serde(default)]
	pub data: Value,
}

impl Envelope {
	pub fn new(channel: Channel, data: Value) -> Self {
		Self { channel, data }
	}
}

/// One unit of work for the plugin.
///
/// Sync payloads stay raw until their handler runs, so a malformed update is
/// rejected by the handler that owns the state it would have replaced.
#[derive(Debug, Clone, PartialEq)]
pub enum PluginEvent {
	Definitions(Value),
	Directories(Value),
	Upload(Vec<PathBuf>),
	Message(Message),
	/// Message envelope whose payload did not decode; handed back unchanged.
	Passthrough(Envelope),
}

impl TryFrom<Envelope> for PluginEvent {
	type Error = ProtocolError;

	fn try_from(envelope: Envelope) -> Result<Self, Self::Error> {
		let channel = envelope.channel;
		let decode_err = |e| ProtocolError::new(channel, e);
		Ok(match channel {
			Channel::Emojis => Self::Definitions(envelope.data),
			Channel::Directories => Self::Directories(envelope.data),
			Channel::Upload => Self::Upload(serde_json::from_value(envelope.data).map_err(decode_err)?),
			Channel::Message => Self::Message(serde_json::from_value(envelope.data).map_err(decode_err)?),
		})
	}
}

#[cfg(test)]
mod tests;
