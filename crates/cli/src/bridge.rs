//! Stdio host bridge.
//!
//! Every input line is one [`Envelope`]: `{"channel": "emojis" | "directories" |
//! "upload" | "message", "data": …}`. Output lines are envelopes on the
//! `emojis` channel (published snapshots) and the `message` channel (every
//! processed message, in input order).
//!
//! Malformed lines are logged and dropped, except a message that fails to
//! decode, which is echoed back unchanged so the host pipeline never loses it.

use emote_config::Config;
use emote_plugin::{Channel, EmotePlugin, Envelope, Host, PluginEvent, event_channel, run};
use emote_primitives::Message;
use emote_registry::DefinitionSet;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// [`Host`] that queues outbound envelopes for the stdout writer.
struct StdioHost {
	out: mpsc::UnboundedSender<Envelope>,
}

impl StdioHost {
	fn emit(&self, channel: Channel, data: Result<Value, serde_json::Error>) {
		match data {
			Ok(data) => {
				if self.out.send(Envelope::new(channel, data)).is_err() {
					warn!(%channel, "output closed, dropping envelope");
				}
			}
			Err(error) => warn!(%channel, %error, "failed to encode outbound payload"),
		}
	}
}

impl Host for StdioHost {
	fn publish_definitions(&self, definitions: &DefinitionSet) {
		self.emit(Channel::Emojis, serde_json::to_value(definitions));
	}

	fn deliver_message(&self, message: Message) {
		self.emit(Channel::Message, serde_json::to_value(message));
	}

	fn forward(&self, envelope: Envelope) {
		let channel = envelope.channel;
		self.emit(channel, Ok(envelope.data));
	}
}

/// Runs the bridge until `input` reaches EOF and all output is flushed. Returns the writer.
pub async fn serve<R, W>(config: Config, queue: usize, input: R, output: W) -> anyhow::Result<W>
where
	R: AsyncRead + Unpin,
	W: AsyncWrite + Unpin + Send + 'static,
{
	let (out_tx, out_rx) = mpsc::unbounded_channel();
	let writer = tokio::spawn(write_envelopes(out_rx, output));

	let plugin = EmotePlugin::new(config, StdioHost { out: out_tx.clone() });
	let (events, rx) = event_channel(queue);
	let pump = tokio::spawn(run(plugin, rx));

	let mut lines = BufReader::new(input).lines();
	while let Some(line) = lines.next_line().await? {
		let line = line.trim();
		if line.is_empty() {
			continue;
		}
		let envelope: Envelope = match serde_json::from_str(line) {
			Ok(envelope) => envelope,
			Err(error) => {
				warn!(%error, "dropping malformed envelope");
				continue;
			}
		};
		let fallback = (envelope.channel == Channel::Message).then(|| envelope.clone());
		match PluginEvent::try_from(envelope) {
			Ok(event) => {
				if events.send(event).await.is_err() {
					break;
				}
			}
			Err(error) => {
				warn!(%error, "rejected inbound payload");
				if let Some(original) = fallback {
					// Keeps its place in the output relative to messages already queued.
					if events.send(PluginEvent::Passthrough(original)).await.is_err() {
						break;
					}
				}
			}
		}
	}

	drop(events);
	drop(out_tx);
	drop(pump.await?);
	let output = writer.await??;
	debug!("bridge drained");
	Ok(output)
}

async fn write_envelopes<W>(mut rx: mpsc::UnboundedReceiver<Envelope>, mut output: W) -> std::io::Result<W>
where
	W: AsyncWrite + Unpin,
{
	while let Some(envelope) = rx.recv().await {
		let mut line = serde_json::to_vec(&envelope)?;
		line.push(b'\n');
		output.write_all(&line).await?;
		output.flush().await?;
	}
	Ok(output)
}

#[cfg(test)]
mod tests;
