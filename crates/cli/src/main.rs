use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use iptv_catalog::store::{save_json_file, CHANNELS_FILE};
use iptv_models::{generate_channel_id, Channel, Config};
use iptv_playlist::{render, Curation, PlaylistEntry};
use iptv_vavoo::VavooClient;
use serde_json::json;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "iptv")]
#[command(about = "CLI tooling for MediaFlow IPTV")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(long, default_value = "config/config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print the upstream auth signature
    Signature,
    /// Resolve a channel link to its playable stream URL
    Resolve {
        /// URL to resolve
        #[arg(long)]
        url: String,
        /// Reuse an existing signature instead of fetching one
        #[arg(long)]
        signature: Option<String>,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fetch the upstream catalog and write the server's channel data file
    Channels {
        /// Catalog group to fetch
        #[arg(long)]
        group: Option<String>,
        /// Output file (defaults to the data dir's channels_data.json)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Fetch the catalog and render the curated M3U8 playlist
    Playlist {
        /// Catalog group to fetch
        #[arg(long)]
        group: Option<String>,
        /// Output playlist file
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        warn!("Failed to load config file: {}, using defaults", e);
        Config::default()
    });

    match cli.command {
        Commands::Signature => {
            let client = VavooClient::new(config.upstream.clone());
            let signature = client
                .fetch_signature()
                .await
                .context("could not obtain the auth signature")?;
            println!("{signature}");
        }
        Commands::Resolve {
            url,
            signature,
            json,
        } => {
            let client = VavooClient::new(config.upstream.clone());
            let signature = match signature {
                Some(signature) => signature,
                None => client
                    .fetch_signature()
                    .await
                    .context("could not obtain the auth signature")?,
            };

            let resolved = client.resolve_link(&url, &signature).await;
            if json {
                let result = json!({
                    "original_url": url,
                    "resolved_url": resolved.as_ref().ok(),
                    "success": resolved.is_ok(),
                });
                println!("{result}");
            } else {
                match resolved {
                    Ok(stream_url) => println!("{stream_url}"),
                    Err(e) => {
                        eprintln!("Error: could not resolve the URL: {e}");
                        std::process::exit(1);
                    }
                }
            }
        }
        Commands::Channels { group, out } => {
            let mut upstream = config.upstream.clone();
            if let Some(group) = group {
                upstream.group = group;
            }
            let client = VavooClient::new(upstream);

            info!("Getting authentication signature...");
            let signature = client
                .fetch_signature()
                .await
                .context("could not obtain the auth signature")?;

            info!("Getting channel list...");
            let items = client.fetch_all_channels(&signature).await;
            anyhow::ensure!(!items.is_empty(), "upstream catalog returned no channels");

            let channels: Vec<Channel> = items
                .into_iter()
                .filter_map(|item| {
                    let url = item.url?;
                    Some(Channel {
                        id: generate_channel_id(&item.name),
                        name: item.name,
                        url,
                        genre: "general".to_string(),
                    })
                })
                .collect();

            let path = out.unwrap_or_else(|| Path::new(&config.data.dir).join(CHANNELS_FILE));
            save_json_file(&path, &channels)?;
            info!("Wrote {} channels to {}", channels.len(), path.display());
        }
        Commands::Playlist { group, out } => {
            let mut upstream = config.upstream.clone();
            if let Some(group) = group {
                upstream.group = group;
            }
            let client = VavooClient::new(upstream);

            info!("Getting authentication signature...");
            let signature = client
                .fetch_signature()
                .await
                .context("could not obtain the auth signature")?;

            info!("Getting channel list...");
            let items = client.fetch_all_channels(&signature).await;
            anyhow::ensure!(!items.is_empty(), "upstream catalog returned no channels");

            let curation = Curation::load_or_init(Path::new("."))?;
            let entries: Vec<PlaylistEntry> = items
                .into_iter()
                .map(|item| PlaylistEntry {
                    name: item.name,
                    url: item.url,
                })
                .collect();

            info!("Generating M3U8 file with {} channels...", entries.len());
            let playlist = render(&entries, &curation, &config.playlist.epg_url);

            let path = out.unwrap_or_else(|| PathBuf::from(&config.playlist.output));
            std::fs::write(&path, playlist)?;
            info!("M3U8 file generated successfully: {}", path.display());
        }
    }

    Ok(())
}
