/// Chime Watchdog - one-shot catalog synchronizer
///
/// Walks the media root, extracts tags, and reconciles the song
/// catalog: stale records are pruned, new files inserted, changed
/// files updated. Meant to be invoked periodically (cron-style, runs
/// must not overlap); per-file problems are logged and skipped, only
/// startup failures flip the exit code.
use chime_sync::SyncManager;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

use config::WatchdogConfig;

#[derive(Parser)]
#[command(name = "chime-watchdog")]
#[command(about = "Reconcile the song catalog with the media directory", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chime_watchdog=info,chime_sync=info,chime_storage=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = WatchdogConfig::load(cli.config.as_deref())?;

    tracing::info!("media root: {}", config.media.root.display());
    tracing::info!("catalog: {}", config.database.url);

    // Connect and migrate up front: schema setup stays outside the
    // reconciler, and an unavailable catalog aborts before any scanning
    let pool = chime_storage::create_pool(&config.database.url).await?;
    chime_storage::run_migrations(&pool).await?;

    let manager = SyncManager::new(pool, config.media.root, config.media.extensions);
    manager.run().await?;

    Ok(())
}
