//! Emoji upload pipeline.
//!
//! Turns raw image files into registry [`Definition`](emote_registry::Definition)s:
//! each file gets a unique id derived from its name, a literal pattern, and a
//! stored copy reachable through the host's asset endpoint.

mod error;
mod ident;
mod pipeline;
mod store;

pub use error::{FailedUpload, NotReadyError, UploadError};
pub use ident::{mint_id, sanitize_id};
pub use pipeline::{IngestReport, UploadPipeline};
pub use store::{AssetStore, FsAssetStore, asset_url};
