//! Core records exchanged with the chat host: content trees, messages, and resolved directories.

/// Message content tree nodes.
pub mod content;
/// Host-resolved runtime directories.
pub mod directories;
/// Chat message envelope.
pub mod message;

pub use content::{ContentNode, ImageContent, RootContent, TextContent};
pub use directories::Directories;
pub use message::Message;
