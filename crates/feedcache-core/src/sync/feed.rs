//! The feed sync core: page loads, offline fallback, dedup merge.

use std::collections::HashSet;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::models::FeedItem;

use super::state::FeedState;
use super::traits::{Connectivity, FeedSource, SnapshotStore};

/// Single authority over one feed's in-memory state.
///
/// Commands take `&mut self`: issuing overlapping `load_page`/`reset` calls
/// against the same instance is a caller error, and the exclusive borrow
/// makes it unrepresentable here. Wrap the instance in an async mutex if a
/// shared handle is needed; that serializes commands, which is the contract.
///
/// An in-flight `load_page` cannot be cancelled from inside the core and
/// there is no timeout layer: a source call that never resolves hangs that
/// command and leaves `loading` set. Timeouts belong to the transport
/// (`FeedClient` configures one on its HTTP client).
pub struct FeedSync<S: FeedSource, C: SnapshotStore, N: Connectivity> {
    source: S,
    store: C,
    connectivity: N,
    state_tx: watch::Sender<FeedState>,
}

impl<S: FeedSource, C: SnapshotStore, N: Connectivity> FeedSync<S, C, N> {
    pub fn new(source: S, store: C, connectivity: N) -> Self {
        let (state_tx, _rx) = watch::channel(FeedState::default());
        Self {
            source,
            store,
            connectivity,
            state_tx,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> FeedState {
        self.state_tx.borrow().clone()
    }

    /// Subscribe to state snapshots. A new value is published after every
    /// mutation, including the `loading` flip at the start of a load.
    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.state_tx.subscribe()
    }

    fn publish(&self, state: FeedState) {
        self.state_tx.send_replace(state);
    }

    /// Load one page of the feed and merge it into the held items.
    ///
    /// Online, the page comes from the source and the fetched payload is
    /// persisted as the new snapshot; offline, the whole snapshot (or an
    /// empty set on a miss) stands in for the page. Either way the payload
    /// goes through the same dedup-append merge. A fetch failure keeps the
    /// held items and surfaces only as `error`.
    pub async fn load_page(&mut self, page: u32) -> FeedState {
        let mut state = self.state();
        state.loading = true;
        state.error = None;
        self.publish(state.clone());

        // Reachability is sampled once per load; a transition mid-call is
        // accepted as a stale read.
        let candidates = if self.connectivity.is_reachable() {
            match self.source.fetch_page(page).await {
                Ok(items) => {
                    // Best-effort persistence: a failed snapshot write must
                    // not fail the load.
                    if let Err(e) = self.store.write(&items) {
                        warn!(error = %e, "Failed to write feed snapshot");
                    }
                    items
                }
                Err(e) => {
                    warn!(page, error = %e, "Feed fetch failed");
                    state.loading = false;
                    state.error = Some(e.to_string());
                    self.publish(state.clone());
                    return state;
                }
            }
        } else {
            debug!(page, "Network unreachable, serving cached snapshot");
            match self.store.read() {
                Ok(Some(items)) => items,
                Ok(None) => Vec::new(),
                Err(e) => {
                    warn!(error = %e, "Failed to read feed snapshot, treating as empty");
                    Vec::new()
                }
            }
        };

        merge_items(&mut state.items, candidates);
        if page > state.current_page {
            state.current_page = page;
        }
        state.loading = false;
        self.publish(state.clone());
        state
    }

    /// Clear held items and rewind to the first page.
    ///
    /// `loading` and `error` are left as-is; callers follow up with
    /// `load_page` to repopulate.
    pub fn reset(&mut self) -> FeedState {
        let mut state = self.state();
        state.items.clear();
        state.current_page = 1;
        self.publish(state.clone());
        state
    }

    /// Pull-to-refresh: drop the held items and reload the first page.
    pub async fn refresh(&mut self) -> FeedState {
        self.reset();
        self.load_page(1).await
    }
}

/// Append candidates whose id is not yet held, preserving their received
/// order. Duplicates are dropped silently, both against held items and
/// within the candidate batch itself.
fn merge_items(items: &mut Vec<FeedItem>, candidates: Vec<FeedItem>) {
    let mut seen: HashSet<i64> = items.iter().map(|item| item.id).collect();
    for candidate in candidates {
        if seen.insert(candidate.id) {
            items.push(candidate);
        }
    }
}
