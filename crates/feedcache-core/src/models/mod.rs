//! Data models for feed content.
//!
//! - `FeedItem`: the canonical content unit held in memory and persisted
//!   in the offline snapshot
//! - `RawPost`: the post-like record shape returned by the remote endpoint,
//!   from which `FeedItem` is derived

pub mod feed_item;

pub use feed_item::{FeedItem, RawPost};
