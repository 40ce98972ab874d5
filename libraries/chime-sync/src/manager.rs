use crate::{
    cleaner,
    error::Result,
    scanner::{LibraryWalker, SongFile},
    types::SyncSummary,
};
use chime_core::TagReader;
use chime_metadata::LoftyTagReader;
use chime_storage::{songs, StorageError};
use sqlx::{SqliteConnection, SqlitePool};
use std::path::PathBuf;
use tracing::{debug, error, info, warn, Instrument};
use uuid::Uuid;

enum Upsert {
    Created,
    Updated,
    Unchanged,
}

/// Orchestrates one full reconciliation run: prune stale records, then
/// upsert every file the walker yields.
///
/// Runs are idempotent and safe to repeat after a partial failure:
/// every record operation commits in its own transaction, so a killed
/// run leaves the catalog individually consistent and the next run
/// applies only the remaining deltas. Concurrent runs against the same
/// catalog are not supported; invocations must be serialized by the
/// operator.
pub struct SyncManager<R = LoftyTagReader> {
    pool: SqlitePool,
    media_root: PathBuf,
    extensions: Vec<String>,
    reader: R,
}

impl SyncManager {
    /// Manager with the default lofty-backed tag reader
    pub fn new(pool: SqlitePool, media_root: impl Into<PathBuf>, extensions: Vec<String>) -> Self {
        Self::with_reader(pool, media_root, extensions, LoftyTagReader::new())
    }
}

impl<R: TagReader + Sync> SyncManager<R> {
    /// Manager with a caller-supplied tag reader
    pub fn with_reader(
        pool: SqlitePool,
        media_root: impl Into<PathBuf>,
        extensions: Vec<String>,
        reader: R,
    ) -> Self {
        Self {
            pool,
            media_root: media_root.into(),
            extensions,
            reader,
        }
    }

    /// Run one full reconciliation pass
    pub async fn run(&self) -> Result<SyncSummary> {
        let run_id = Uuid::new_v4().to_string();
        let span = tracing::info_span!("sync_run", run = %run_id);
        self.run_inner(run_id).instrument(span).await
    }

    async fn run_inner(&self, run_id: String) -> Result<SyncSummary> {
        let started_at = chrono::Utc::now();
        let start = std::time::Instant::now();

        info!("starting sync of {}", self.media_root.display());

        // Phase 1: drop records whose backing file is gone
        let pruned = cleaner::prune(&self.pool, &self.media_root).await?;

        // Phase 2: walk the tree and upsert every candidate
        debug!("starting sync phase");
        let walker = LibraryWalker::new(
            self.media_root.clone(),
            self.extensions.clone(),
            &self.reader,
        );

        let mut files_seen = 0;
        let mut created = 0;
        let mut updated = 0;
        let mut unchanged = 0;
        let mut errors = 0;

        for song_file in walker.walk() {
            files_seen += 1;

            // A transaction per record: failure on this one rolls back
            // this one only. Failing to even open a transaction is an
            // infrastructure problem and aborts the run.
            let mut tx = self.pool.begin().await?;
            match Self::apply(&mut tx, &song_file).await {
                Ok(outcome) => {
                    tx.commit().await?;
                    match outcome {
                        Upsert::Created => created += 1,
                        Upsert::Updated => updated += 1,
                        Upsert::Unchanged => unchanged += 1,
                    }
                }
                Err(StorageError::Duplicate(path)) => {
                    // find-then-create saw no record yet the insert hit
                    // the unique key: the single-writer invariant is
                    // broken, likely an overlapping run
                    error!("duplicate catalog path: {}", path);
                    errors += 1;
                }
                Err(e) => {
                    warn!("failed to upsert {}: {}", song_file.path, e);
                    errors += 1;
                }
            }
        }

        let summary = SyncSummary {
            run_id,
            started_at: started_at.to_rfc3339(),
            completed_at: chrono::Utc::now().to_rfc3339(),
            duration_seconds: start.elapsed().as_secs(),
            files_seen,
            songs_created: created,
            songs_updated: updated,
            songs_unchanged: unchanged,
            songs_pruned: pruned,
            errors_encountered: errors,
        };

        info!(
            "sync complete: {} files seen, {} created, {} updated, {} unchanged, {} pruned, {} errors in {}s",
            summary.files_seen,
            summary.songs_created,
            summary.songs_updated,
            summary.songs_unchanged,
            summary.songs_pruned,
            summary.errors_encountered,
            summary.duration_seconds
        );

        Ok(summary)
    }

    /// Create-or-update one record inside the caller's transaction.
    ///
    /// Metadata is fully replaced, never merged: a file whose tags went
    /// absent overwrites the previously populated fields. Records whose
    /// stored metadata already matches are left alone so an unchanged
    /// tree re-syncs without a single write.
    async fn apply(
        conn: &mut SqliteConnection,
        song_file: &SongFile,
    ) -> std::result::Result<Upsert, StorageError> {
        match songs::find_by_path(conn, &song_file.path).await? {
            Some(existing) => {
                if existing.tags() == song_file.tags {
                    Ok(Upsert::Unchanged)
                } else {
                    songs::update(conn, existing.id, &song_file.tags).await?;
                    Ok(Upsert::Updated)
                }
            }
            None => {
                songs::create(conn, &song_file.path, &song_file.tags).await?;
                Ok(Upsert::Created)
            }
        }
    }
}
