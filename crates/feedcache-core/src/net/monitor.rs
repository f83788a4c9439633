use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::sync::Connectivity;

/// Reachability flag fed by a platform bridge and observed by the sync core
/// and the presentation layer.
///
/// Clone is cheap; all handles share the same underlying channel.
#[derive(Debug, Clone)]
pub struct NetMonitor {
    tx: Arc<watch::Sender<bool>>,
}

impl NetMonitor {
    pub fn new(initially_reachable: bool) -> Self {
        let (tx, _rx) = watch::channel(initially_reachable);
        Self { tx: Arc::new(tx) }
    }

    /// Record a reachability transition. Subscribers are only woken when the
    /// value actually changes.
    pub fn set_reachable(&self, reachable: bool) {
        self.tx.send_if_modified(|current| {
            if *current != reachable {
                debug!(reachable, "Network reachability changed");
                *current = reachable;
                true
            } else {
                false
            }
        });
    }
}

impl Default for NetMonitor {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Connectivity for NetMonitor {
    fn is_reachable(&self) -> bool {
        *self.tx.borrow()
    }

    fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}
