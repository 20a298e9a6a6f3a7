use std::path::PathBuf;
use std::sync::Arc;

use emote_config::Config;
use emote_matcher::rewrite;
use emote_primitives::{Directories, Message};
use emote_registry::{DefinitionSet, Registry, Snapshot};
use emote_upload::{FsAssetStore, IngestReport, UploadPipeline};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{Channel, Host, PluginError, PluginEvent, ProtocolError};

/// One plugin instance: owns the registry and upload state for a host connection.
pub struct EmotePlugin<H: Host> {
	config: Config,
	registry: Registry,
	uploads: UploadPipeline,
	host: H,
}

impl<H: Host> EmotePlugin<H> {
	pub fn new(config: Config, host: H) -> Self {
		Self {
			config,
			registry: Registry::new(),
			uploads: UploadPipeline::new(),
			host,
		}
	}

	pub fn registry(&self) -> &Registry {
		&self.registry
	}

	pub fn host(&self) -> &H {
		&self.host
	}

	/// True once the asset directory is known and uploads are accepted.
	pub fn is_ready(&self) -> bool {
		self.uploads.is_ready()
	}

	/// Dispatches one event. Errors are logged; none of them stop the plugin.
	pub fn handle(&mut self, event: PluginEvent) {
		let result = match event {
			PluginEvent::Definitions(payload) => self.on_definitions(payload).map(drop).map_err(PluginError::from),
			PluginEvent::Directories(payload) => self.on_directories(payload),
			PluginEvent::Upload(paths) => self.on_upload(&paths).map(drop),
			PluginEvent::Message(message) => {
				let message = self.transform_message(message);
				self.host.deliver_message(message);
				Ok(())
			}
			PluginEvent::Passthrough(envelope) => {
				self.host.forward(envelope);
				Ok(())
			}
		};
		if let Err(error) = result {
			warn!(%error, "event rejected");
		}
	}

	/// Installs a full definitions snapshot received on the `emojis` channel.
	///
	/// `null` clears the registry. A payload that does not decode leaves the
	/// current snapshot in place.
	pub fn on_definitions(&self, payload: Value) -> Result<Arc<Snapshot>, ProtocolError> {
		let definitions = if payload.is_null() {
			DefinitionSet::new()
		} else {
			serde_json::from_value(payload).map_err(|e| ProtocolError::new(Channel::Emojis, e))?
		};
		Ok(self.registry.replace(definitions))
	}

	/// Resolves the asset directory and enables uploads.
	///
	/// `<assets>/<dir_name>` is created before the store is installed, so an
	/// upload can never target a directory that does not exist.
	pub fn on_directories(&mut self, payload: Value) -> Result<(), PluginError> {
		let dirs: Directories =
			serde_json::from_value(payload).map_err(|e| ProtocolError::new(Channel::Directories, e))?;

		let dir = dirs.asset_dir(&self.config.assets.dir_name);
		std::fs::create_dir_all(&dir).map_err(|error| PluginError::AssetDir {
			path: dir.clone(),
			error,
		})?;

		info!(dir = %dir.display(), "emoji asset directory ready");
		let store = FsAssetStore::new(dir, self.config.assets.dir_name.as_str(), self.config.server.host.as_str());
		self.uploads.configure(Arc::new(store));
		Ok(())
	}

	/// Ingests `paths` and publishes the resulting snapshot once for the batch.
	///
	/// The new snapshot is installed locally as well as published, so a second
	/// batch arriving before the host echoes the first one back still sees the
	/// ids minted by the first. Nothing is published when no file was ingested.
	pub fn on_upload(&self, paths: &[PathBuf]) -> Result<IngestReport, PluginError> {
		let snapshot = self.registry.snapshot();
		let report = self.uploads.ingest(paths, snapshot.definitions())?;

		if report.added.is_empty() {
			warn!(files = paths.len(), failed = report.failures.len(), "upload batch added nothing");
			return Ok(report);
		}

		let published = self.registry.replace(report.definitions.clone());
		self.host.publish_definitions(published.definitions());
		info!(
			added = report.added.len(),
			failed = report.failures.len(),
			total = published.definitions().len(),
			"published emoji snapshot"
		);
		Ok(report)
	}

	/// Message hook: annotates the content tree of messages that have an author.
	///
	/// Only `content` is replaced. The registry snapshot is pinned once for the
	/// whole tree.
	pub fn transform_message(&self, mut message: Message) -> Message {
		if !message.has_author() {
			return message;
		}
		let Some(content) = message.content.as_ref() else {
			return message;
		};

		let snapshot = self.registry.snapshot();
		let rewritten = rewrite(content, &snapshot);
		debug!(
			id = message.id.as_deref().unwrap_or_default(),
			generation = snapshot.generation(),
			changed = rewritten != *content,
			"message annotated"
		);
		message.content = Some(rewritten);
		message
	}
}
