//! Single-consumer event pump.
//!
//! Events are handled to completion one after another on the task running
//! [`run`]: message N is rewritten before message N+1, and a sync update or
//! upload batch is never interleaved with a message. Upload I/O blocks the
//! pump for the duration of the batch.

use tokio::sync::mpsc;
use tracing::debug;

use crate::{EmotePlugin, Host, PluginEvent};

pub type EventSender = mpsc::Sender<PluginEvent>;

/// Creates the bounded channel feeding [`run`]. Senders wait when it is full.
pub fn event_channel(capacity: usize) -> (EventSender, mpsc::Receiver<PluginEvent>) {
	mpsc::channel(capacity)
}

/// Drains `events` into `plugin` until every sender is dropped, then returns the plugin.
pub async fn run<H: Host>(mut plugin: EmotePlugin<H>, mut events: mpsc::Receiver<PluginEvent>) -> EmotePlugin<H> {
	let mut handled: u64 = 0;
	while let Some(event) = events.recv().await {
		plugin.handle(event);
		handled += 1;
	}
	debug!(handled, "event channel closed");
	plugin
}
