//! Local snapshot persistence for offline feed access.
//!
//! This module provides the `FileSnapshotStore`, which keeps the most
//! recent feed payload in a single JSON slot under the cache directory.
//! The slot is replaced whole on every write; there is no incremental or
//! versioned persistence.

pub mod store;

pub use store::FileSnapshotStore;
