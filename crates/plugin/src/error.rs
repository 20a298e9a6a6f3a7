use std::io;
use std::path::PathBuf;

use emote_upload::NotReadyError;

use crate::Channel;

/// Malformed payload on a host channel. The update is ignored and prior state kept.
#[derive(Debug, thiserror::Error)]
#[error("malformed {channel} payload: {source}")]
pub struct ProtocolError {
	pub channel: Channel,
	#[source]
	pub source: serde_json::Error,
}

impl ProtocolError {
	pub(crate) fn new(channel: Channel, source: serde_json::Error) -> Self {
		Self { channel, source }
	}
}

#[derive(Debug, thiserror::Error)]
pub enum PluginError {
	#[error(transparent)]
	Protocol(#[from] ProtocolError),

	#[error("upload rejected: {0}")]
	NotReady(#[from] NotReadyError),

	#[error("failed to create asset directory {path}: {error}")]
	AssetDir { path: PathBuf, error: io::Error },
}
