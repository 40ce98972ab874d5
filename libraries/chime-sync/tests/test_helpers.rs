//! Shared fixtures for reconciler integration tests
//!
//! Real SQLite files and real directory trees via tempfile; tag
//! decoding is stubbed so no actual audio files are needed.

use chime_core::{RawTagSet, TagError, TagReader};
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::path::Path;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = chime_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        chime_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Tag reader serving canned values keyed by file name
pub struct StubReader {
    tags: HashMap<String, RawTagSet>,
}

impl StubReader {
    pub fn new(entries: &[(&str, RawTagSet)]) -> Self {
        Self {
            tags: entries
                .iter()
                .map(|(name, raw)| ((*name).to_string(), raw.clone()))
                .collect(),
        }
    }
}

impl TagReader for StubReader {
    fn extract(&self, path: &Path) -> Result<RawTagSet, TagError> {
        if !path.exists() {
            return Err(TagError::FileMissing(path.to_path_buf()));
        }
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        self.tags
            .get(&name)
            .cloned()
            .ok_or_else(|| TagError::unreadable(path, "stub rejects this file"))
    }
}

/// Media tree rooted in a temp directory
pub struct MediaTree {
    dir: TempDir,
}

impl Default for MediaTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaTree {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create media root"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Create an (empty) media file at the given relative path
    pub fn touch(&self, rel: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, b"audio bytes").unwrap();
    }

    pub fn remove(&self, rel: &str) {
        std::fs::remove_file(self.dir.path().join(rel)).unwrap();
    }
}

pub fn default_extensions() -> Vec<String> {
    vec![
        "flac".to_string(),
        "mp3".to_string(),
        "ogg".to_string(),
        "wav".to_string(),
    ]
}
