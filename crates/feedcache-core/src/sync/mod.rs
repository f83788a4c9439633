//! Feed synchronization core.
//!
//! `FeedSync` is the single authority over the in-memory feed: it merges
//! paginated remote data into a deduplicated, append-only list, falls back
//! to the persisted snapshot when the network is unreachable, and publishes
//! a `FeedState` snapshot to subscribers after every mutation.
//!
//! Collaborators (remote source, snapshot store, connectivity signal) are
//! injected behind the traits in [`traits`], so the core can be driven
//! against fakes in tests and against `FeedClient`/`FileSnapshotStore`/
//! `NetMonitor` in production.

pub mod feed;
pub mod state;
pub mod traits;

pub use feed::FeedSync;
pub use state::{next_page_number, FeedState};
pub use traits::{Connectivity, FeedSource, SnapshotStore};
