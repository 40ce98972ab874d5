/// Watchdog configuration
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WatchdogConfig {
    #[serde(default = "default_media")]
    pub media: MediaSettings,

    #[serde(default = "default_database")]
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaSettings {
    /// Directory under which all tracked media files live
    #[serde(default = "default_media_root")]
    pub root: PathBuf,

    /// Accepted file extensions, matched as found
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseSettings {
    /// Catalog connection URL. Host, user, password, and database name
    /// all travel inside the URL for server-backed deployments.
    #[serde(default = "default_database_url")]
    pub url: String,
}

impl WatchdogConfig {
    /// Load configuration from file and environment.
    ///
    /// An explicitly given file must exist; the default `watchdog.toml`
    /// is only read when present. Environment variables prefixed with
    /// `CHIME_` override file values.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from("watchdog.toml");
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("CHIME")
                .separator("_")
                .try_parsing(true),
        );

        settings
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")
    }
}

// Default values
fn default_media() -> MediaSettings {
    MediaSettings {
        root: default_media_root(),
        extensions: default_extensions(),
    }
}

fn default_media_root() -> PathBuf {
    PathBuf::from("./media")
}

fn default_extensions() -> Vec<String> {
    vec![
        "flac".to_string(),
        "mp3".to_string(),
        "ogg".to_string(),
        "wav".to_string(),
    ]
}

fn default_database() -> DatabaseSettings {
    DatabaseSettings {
        url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/chime.db".to_string()
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self {
            media: default_media(),
            database: default_database(),
        }
    }
}
