use std::fs;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use iptv_api::AppState;
use iptv_catalog::{CatalogService, ChannelStore};
use iptv_metrics::MetricsService;
use iptv_models::Config;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().init();

    info!("Starting MediaFlow IPTV server");

    // Load configuration from file or use defaults
    let config_path =
        std::env::var("IPTV_CONFIG").unwrap_or_else(|_| "config/config.toml".to_string());
    let config = Config::load(&config_path).unwrap_or_else(|e| {
        warn!("Failed to load config file: {}, using defaults", e);
        Config::default()
    });

    info!("Configuration loaded: {:?}", config);

    // Ensure the data directory exists before the store touches it
    if !config.data.dir.is_empty() {
        let _ = fs::create_dir_all(&config.data.dir);
    }

    let metrics = Arc::new(MetricsService::new()?);
    let store = ChannelStore::new(&config.data.dir);
    let catalog = Arc::new(CatalogService::new(
        store,
        Duration::from_secs(config.cache.channels_ttl_secs),
    ));

    let state = AppState::new(config.clone(), catalog, metrics);

    let bind = config.server.bind.clone();
    let port = config.server.port;
    let server_handle = tokio::spawn(async move {
        if let Err(e) = iptv_api::start_server(bind, port, state).await {
            warn!("Addon server error: {}", e);
        }
    });

    info!(
        "MediaFlow IPTV server started successfully on {}:{}",
        config.server.bind, config.server.port
    );

    // Wait for shutdown signal
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Received shutdown signal");
        }
        Err(err) => {
            warn!("Unable to listen for shutdown signal: {}", err);
        }
    }

    info!("Shutting down MediaFlow IPTV server...");
    server_handle.abort();

    info!("MediaFlow IPTV server shutdown complete");
    Ok(())
}
