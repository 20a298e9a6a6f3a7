//! Emoji annotation plugin.
//!
//! Wires the registry, matcher and upload pipeline to the host's channels:
//!
//! | Channel | Direction | Payload | Handler |
//! |---|---|---|---|
//! | `emojis` | in/out | `{id: Definition}` full snapshot | [`EmotePlugin::on_definitions`], [`Host::publish_definitions`] |
//! | `directories` | in | `{data, assets, plugins}` | [`EmotePlugin::on_directories`] |
//! | `upload` | in | `[path, …]` | [`EmotePlugin::on_upload`] |
//! | `message` | in/out | chat message | [`EmotePlugin::transform_message`], [`Host::deliver_message`] |
//!
//! Events are handled strictly one at a time; [`run`] drains an event channel
//! on a single task so message order is preserved.

mod error;
mod event;
mod host;
mod plugin;
mod pump;

pub use error::{PluginError, ProtocolError};
pub use event::{Channel, Envelope, PluginEvent};
pub use host::Host;
pub use plugin::EmotePlugin;
pub use pump::{EventSender, event_channel, run};
