//! moodlens-web - Sentiment web service
//!
//! Scores free text (word lexicon blended with emoji weights), keeps every
//! result in `<root>/sentiment.db` and serves history pages, a JSON API and a
//! CSV export.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use moodlens_common::config::{
    CompiledDefaults, RootFolderInitializer, RootFolderResolver, TomlConfig,
};
use moodlens_common::Scorer;
use moodlens_web::api::BuildInfo;
use moodlens_web::{build_router, AppState, MODULE_NAME};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for moodlens-web
#[derive(Parser, Debug)]
#[command(name = "moodlens-web")]
#[command(about = "Text and emoji sentiment web service")]
#[command(version)]
struct Args {
    /// Root folder holding sentiment.db (overrides MOODLENS_ROOT_FOLDER and the config file)
    #[arg(short, long)]
    root_folder: Option<PathBuf>,

    /// Address to listen on, e.g. 127.0.0.1:5780
    #[arg(short, long, env = "MOODLENS_BIND")]
    bind: Option<String>,

    /// Log filter directive, e.g. "info" or "moodlens_web=debug"
    #[arg(short, long, env = "MOODLENS_LOG")]
    log_level: Option<String>,

    /// Config file to read instead of the per-user default
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let defaults = CompiledDefaults::for_current_platform();

    let mut resolver = RootFolderResolver::new(MODULE_NAME).with_cli_override(args.root_folder);
    if let Some(config) = args.config {
        resolver = resolver.with_config_file(config);
    }
    let toml_config = TomlConfig::load_or_default(resolver.config_file());

    // Initialize tracing: RUST_LOG wins, then --log-level, the config file, the default
    let directive = args
        .log_level
        .or(toml_config.log_level)
        .unwrap_or(defaults.log_level);
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Log build identification immediately after tracing init
    info!("Starting MoodLens {}", BuildInfo::current());

    if let Some(path) = resolver.config_file() {
        info!(
            "Config file: {} ({})",
            path.display(),
            if path.exists() { "loaded" } else { "not found, using defaults" }
        );
    }

    let root_folder = resolver.resolve();
    let initializer = RootFolderInitializer::new(root_folder);
    initializer
        .ensure_directory_exists()
        .context("Failed to initialize root folder")?;

    let db_path = initializer.database_path();
    if initializer.database_exists() {
        info!("Database path: {}", db_path.display());
    } else {
        info!("Database path: {} (first run, creating)", db_path.display());
    }

    let pool = match moodlens_common::db::init_database(&db_path).await {
        Ok(pool) => {
            info!("✓ Database ready");
            pool
        }
        Err(e) => {
            error!("Failed to open database: {}", e);
            return Err(e.into());
        }
    };

    let scorer = Scorer::default();
    info!("Text polarity provider: {}", scorer.provider_name());

    let state = AppState::new(pool, scorer);
    let app = build_router(state);

    let bind_addr = args
        .bind
        .or(toml_config.bind_addr)
        .unwrap_or(defaults.bind_addr);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;
    info!("{} listening on http://{}", MODULE_NAME, bind_addr);
    info!("Health check: http://{}/health", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
