//! Emoji annotation of message content.
//!
//! [`find_earliest_match`] locates the leftmost occurrence of any registered
//! pattern in a text span; [`rewrite`] walks a content tree and splits every
//! text leaf into text and image fragments using it.

mod find;
mod rewrite;

pub use find::{PatternMatch, find_earliest_match};
pub use rewrite::{rewrite, rewrite_text};
