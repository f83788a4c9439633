use crate::models::FeedItem;

/// Read model for the feed, published to subscribers after every mutation.
///
/// Owned exclusively by [`FeedSync`](super::FeedSync); consumers receive
/// cloned snapshots and never mutate it directly.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    /// Held items in arrival order, no duplicate ids.
    pub items: Vec<FeedItem>,
    /// True only strictly between command dispatch and its resolution.
    pub loading: bool,
    /// Message of the most recent failed fetch; cleared when the next
    /// command starts.
    pub error: Option<String>,
    /// Highest page loaded so far; rewound to 1 by `reset`.
    pub current_page: u32,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            current_page: 1,
        }
    }
}

/// Page to request when the consumer scrolls past the end of `item_count`
/// held items.
///
/// Recomputed from the held count each time the boundary is crossed rather
/// than tracked as separate mutable state. `page_size` must be non-zero.
pub fn next_page_number(item_count: usize, page_size: usize) -> u32 {
    (item_count / page_size) as u32 + 1
}
