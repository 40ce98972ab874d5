//! Chime Storage
//!
//! `SQLite` database layer for the Chime media catalog.
//!
//! The catalog is a single `songs` table keyed by root-relative file
//! path. The synchronizer owns every write; the web presentation layer
//! reads the same schema, which is why the play counter keeps its
//! legacy physical column name.
//!
//! # Example
//!
//! ```rust,no_run
//! use chime_storage::{create_pool, run_migrations, songs};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://chime.db").await?;
//! run_migrations(&pool).await?;
//!
//! let mut conn = pool.acquire().await?;
//! let all = songs::list_all(&mut conn).await?;
//! # Ok(())
//! # }
//! ```

mod error;

// Vertical slices
pub mod songs;

pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts, before any
/// catalog work, to ensure the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://chime.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    // Parse the URL into options so we can configure SQLite behavior
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
