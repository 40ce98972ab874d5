//! Songs vertical slice
//!
//! Keyed CRUD over the `songs` table. Every function takes a plain
//! connection so the caller decides the transaction boundary: the
//! synchronizer wraps each record operation in its own short-lived
//! transaction and these queries simply join it.

use crate::error::{Result, StorageError};
use chime_core::{Song, SongTags};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};

/// Catalog key pair returned by [`list_all`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRef {
    /// Surrogate catalog key
    pub id: i64,
    /// Root-relative file path
    pub path: String,
}

fn song_from_row(row: &SqliteRow) -> Song {
    Song {
        id: row.get("id"),
        path: row.get("path"),
        title: row.get("title"),
        artist: row.get("artist"),
        album: row.get("album"),
        year: row.get("year"),
        duration: row.get("duration"),
        // legacy physical column name, read by the web layer as-is
        play_count: row.get("playCount"),
    }
}

/// List the id and path of every catalog record
pub async fn list_all(conn: &mut SqliteConnection) -> Result<Vec<SongRef>> {
    let rows = sqlx::query("SELECT id, path FROM songs ORDER BY id")
        .fetch_all(&mut *conn)
        .await?;

    Ok(rows
        .iter()
        .map(|row| SongRef {
            id: row.get("id"),
            path: row.get("path"),
        })
        .collect())
}

/// Look up a record by its root-relative path
pub async fn find_by_path(conn: &mut SqliteConnection, path: &str) -> Result<Option<Song>> {
    let row = sqlx::query(
        "SELECT id, path, title, artist, album, year, duration, playCount
         FROM songs WHERE path = ?",
    )
    .bind(path)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row.as_ref().map(song_from_row))
}

/// Insert a new record with the given path and metadata.
///
/// The play counter starts at the schema default of zero.
///
/// # Errors
/// Returns [`StorageError::Duplicate`] if a record with the same path
/// already exists.
pub async fn create(conn: &mut SqliteConnection, path: &str, tags: &SongTags) -> Result<Song> {
    let result = sqlx::query(
        "INSERT INTO songs (path, title, artist, album, year, duration)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(path)
    .bind(&tags.title)
    .bind(&tags.artist)
    .bind(&tags.album)
    .bind(tags.year)
    .bind(tags.duration)
    .execute(&mut *conn)
    .await
    .map_err(|e| {
        if e.as_database_error()
            .is_some_and(|db| db.is_unique_violation())
        {
            StorageError::Duplicate(path.to_string())
        } else {
            StorageError::Database(e)
        }
    })?;

    Ok(Song {
        id: result.last_insert_rowid(),
        path: path.to_string(),
        title: tags.title.clone(),
        artist: tags.artist.clone(),
        album: tags.album.clone(),
        year: tags.year,
        duration: tags.duration,
        play_count: 0,
    })
}

/// Replace a record's metadata.
///
/// The statement enumerates exactly the mutable metadata columns, so
/// the identity key and the play counter are untouchable here.
pub async fn update(conn: &mut SqliteConnection, id: i64, tags: &SongTags) -> Result<()> {
    let result = sqlx::query(
        "UPDATE songs SET title = ?, artist = ?, album = ?, year = ?, duration = ?
         WHERE id = ?",
    )
    .bind(&tags.title)
    .bind(&tags.artist)
    .bind(&tags.album)
    .bind(tags.year)
    .bind(tags.duration)
    .bind(id)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("Song", id.to_string()));
    }

    Ok(())
}

/// Delete a record by its catalog key
pub async fn delete_by_id(conn: &mut SqliteConnection, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("Song", id.to_string()));
    }

    Ok(())
}
