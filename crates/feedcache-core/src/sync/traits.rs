//! Collaborator contracts for the feed sync core.

use std::future::Future;

use anyhow::Result;
use tokio::sync::watch;

use crate::models::FeedItem;

/// A remote source of paginated feed items.
pub trait FeedSource {
    /// Fetch one page of items, in display order.
    ///
    /// An empty page is a valid success (the collection simply ends there)
    /// and must stay distinguishable from a failed request. One attempt per
    /// call; the sync core never retries on its own.
    fn fetch_page(&self, page: u32) -> impl Future<Output = Result<Vec<FeedItem>>> + Send;
}

/// Whole-snapshot persistence for the last known feed payload.
///
/// A single named slot, replaced in full on every write. The sync core
/// absorbs read and write failures: neither ever fails a command.
pub trait SnapshotStore {
    /// The last persisted payload, or `None` if no snapshot exists.
    fn read(&self) -> Result<Option<Vec<FeedItem>>>;

    /// Replace the snapshot with `items`.
    fn write(&self, items: &[FeedItem]) -> Result<()>;
}

/// Network reachability signal.
pub trait Connectivity {
    /// Current reachability. The sync core samples this once at the start
    /// of each load; a transition mid-call is not re-checked.
    fn is_reachable(&self) -> bool;

    /// Change notifications, consumed by the presentation layer.
    fn subscribe(&self) -> watch::Receiver<bool>;
}
