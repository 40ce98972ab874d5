use crate::error::Result;
use chime_storage::songs;
use sqlx::SqlitePool;
use std::path::Path;
use tracing::{debug, info};

/// Delete every catalog record whose backing file no longer exists
/// under the media root.
///
/// One short transaction per deletion: an interrupted run leaves the
/// already-pruned records gone and everything else untouched, and the
/// next run picks up where this one stopped.
pub async fn prune(pool: &SqlitePool, media_root: &Path) -> Result<usize> {
    debug!("starting prune phase");

    let mut conn = pool.acquire().await?;
    let records = songs::list_all(&mut conn).await?;
    drop(conn);

    let mut pruned = 0;
    for record in records {
        if media_root.join(&record.path).exists() {
            continue;
        }

        let mut tx = pool.begin().await?;
        songs::delete_by_id(&mut tx, record.id).await?;
        tx.commit().await?;

        info!("pruned: {}", record.path);
        pruned += 1;
    }

    debug!("prune complete: removed {} stale records", pruned);

    Ok(pruned)
}
