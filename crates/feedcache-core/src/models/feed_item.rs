use serde::{Deserialize, Serialize};

/// Placeholder image service; yields a stable image per item id.
const IMAGE_SEED_URL: &str = "https://picsum.photos/seed";

/// One content unit displayed in the feed.
///
/// Identity is `id`: two items with the same id are the same item, and the
/// sync core never holds both. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Raw post record as returned by the remote endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPost {
    pub id: i64,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId", default)]
    pub user_id: Option<i64>,
}

impl RawPost {
    /// Derive the feed item for this post. The image URL is synthesized
    /// deterministically from the post id.
    pub fn to_feed_item(&self) -> FeedItem {
        FeedItem {
            id: self.id,
            title: self.title.clone(),
            description: self.body.clone(),
            image_url: format!("{}/{}/400/300", IMAGE_SEED_URL, self.id),
        }
    }
}
