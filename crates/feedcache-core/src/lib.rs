//! Feed synchronization and caching core for feedcache.
//!
//! This crate owns the one non-trivial problem of the app: keeping a
//! paginated remote feed, an in-memory item list, and a persisted offline
//! snapshot consistent behind a single read model.
//!
//! - [`sync::FeedSync`] merges pages into a deduplicated, append-only list,
//!   falls back to the snapshot when offline, and publishes [`sync::FeedState`]
//!   to subscribers after every mutation
//! - [`api::FeedClient`] fetches pages from the remote post collection
//! - [`cache::FileSnapshotStore`] persists the last payload for offline use
//! - [`net::NetMonitor`] carries the reachability flag from the platform
//!   bridge to the core and the presentation layer
//!
//! Rendering, image loading, theming, and device sensors are presentation
//! concerns and live outside this crate; they consume the state surface and
//! drive the command surface (`load_page`, `reset`, `refresh`).

pub mod api;
pub mod cache;
pub mod config;
pub mod models;
pub mod net;
pub mod sync;

pub use api::{ApiError, FeedClient};
pub use cache::FileSnapshotStore;
pub use config::Config;
pub use models::FeedItem;
pub use net::NetMonitor;
pub use sync::{next_page_number, Connectivity, FeedSource, FeedState, FeedSync, SnapshotStore};
