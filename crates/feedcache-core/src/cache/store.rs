use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::models::FeedItem;
use crate::sync::SnapshotStore;

/// File name of the single snapshot slot
const SNAPSHOT_FILE: &str = "feed.json";

/// File-backed snapshot store holding the last known feed payload.
pub struct FileSnapshotStore {
    cache_dir: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(cache_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&cache_dir)?;
        Ok(Self { cache_dir })
    }

    fn snapshot_path(&self) -> PathBuf {
        self.cache_dir.join(SNAPSHOT_FILE)
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn read(&self) -> Result<Option<Vec<FeedItem>>> {
        let path = self.snapshot_path();
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;

        let items: Vec<FeedItem> = serde_json::from_str(&contents)
            .context("Failed to parse snapshot file")?;

        Ok(Some(items))
    }

    fn write(&self, items: &[FeedItem]) -> Result<()> {
        let path = self.snapshot_path();
        let tmp = path.with_extension("json.tmp");
        let contents = serde_json::to_string_pretty(&items)?;

        // Write-then-rename so a crash mid-write never leaves a torn snapshot.
        std::fs::write(&tmp, contents)
            .with_context(|| format!("Failed to write snapshot file: {}", tmp.display()))?;
        std::fs::rename(&tmp, &path)
            .with_context(|| format!("Failed to replace snapshot file: {}", path.display()))?;
        Ok(())
    }
}
