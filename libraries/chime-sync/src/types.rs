use serde::{Deserialize, Serialize};

/// Summary of a completed reconciliation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncSummary {
    pub run_id: String,
    pub started_at: String,
    pub completed_at: String,
    pub duration_seconds: u64,
    /// Accepted media files yielded by the walk
    pub files_seen: usize,
    pub songs_created: usize,
    pub songs_updated: usize,
    /// Records whose stored metadata already matched the file
    pub songs_unchanged: usize,
    pub songs_pruned: usize,
    /// Record operations that failed and were skipped
    pub errors_encountered: usize,
}

impl SyncSummary {
    /// True when the run changed nothing in the catalog
    pub fn is_noop(&self) -> bool {
        self.songs_created == 0 && self.songs_updated == 0 && self.songs_pruned == 0
    }
}
