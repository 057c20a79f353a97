//! amuse-server - now-playing query service
//!
//! Exposes the music player's current state on `GET /query` (port 9863 by
//! default) for now-playing widgets.

use std::path::PathBuf;

use amuse_common::{ProviderConfig, ServerConfig};
use amuse_server::{provider, AppState, QueryServer};
use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for amuse-server
#[derive(Parser, Debug)]
#[command(name = "amuse-server")]
#[command(about = "Now-playing query service for music player widgets")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "AMUSE_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, env = "AMUSE_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "AMUSE_PORT")]
    port: Option<u16>,

    /// Read player state from this URL
    #[arg(long, env = "AMUSE_PROVIDER_URL", conflicts_with = "provider_file")]
    provider_url: Option<String>,

    /// Read player state from this JSON file
    #[arg(long, env = "AMUSE_PROVIDER_FILE")]
    provider_file: Option<PathBuf>,

    /// Give up on a provider read after this many milliseconds
    #[arg(long, env = "AMUSE_PROVIDER_TIMEOUT_MS")]
    provider_timeout_ms: Option<u64>,
}

impl Args {
    /// Layer command-line and environment values over the file configuration
    fn apply(self, config: &mut ServerConfig) {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(url) = self.provider_url {
            config.provider = ProviderConfig::Http { url };
        } else if let Some(path) = self.provider_file {
            config.provider = ProviderConfig::File { path };
        }
        if self.provider_timeout_ms.is_some() {
            config.provider_timeout_ms = self.provider_timeout_ms;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "amuse_server=info,amuse_common=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Amuse server v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();
    let mut config =
        ServerConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    args.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    let provider = provider::from_config(&config.provider)
        .context("Failed to initialize state provider")?;
    info!("Reading player state from {}", provider.describe());
    match config.provider_timeout() {
        Some(limit) => info!("Provider reads time out after {:?}", limit),
        None => info!("Provider reads wait without timeout"),
    }

    let state = AppState::new(provider, config.provider_timeout());
    let server = QueryServer::bind(config.bind_addr(), state)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr()))?;
    let handle = server.serve().context("Failed to start server")?;

    shutdown_signal().await;
    handle.shutdown().await.context("Server error")?;

    Ok(())
}

/// Wait for the host to ask us to quit
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
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
