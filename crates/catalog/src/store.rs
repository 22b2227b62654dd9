use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use iptv_models::{AddonError, Channel, StreamHeaders};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};

pub const CHANNELS_FILE: &str = "channels_data.json";
pub const ICONS_FILE: &str = "channel_icons.json";
pub const HEADERS_FILE: &str = "headers.json";

/// JSON-file backed channel storage under the data directory.
#[derive(Debug, Clone)]
pub struct ChannelStore {
    data_dir: PathBuf,
}

impl ChannelStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn channels_path(&self) -> PathBuf {
        self.data_dir.join(CHANNELS_FILE)
    }

    pub fn icons_path(&self) -> PathBuf {
        self.data_dir.join(ICONS_FILE)
    }

    pub fn headers_path(&self) -> PathBuf {
        self.data_dir.join(HEADERS_FILE)
    }

    /// Loads the channel list. A missing or empty file is seeded with the
    /// example lineup so a fresh install serves something.
    pub fn load_channels(&self) -> Vec<Channel> {
        let channels: Vec<Channel> = load_json_file(&self.channels_path()).unwrap_or_default();
        if !channels.is_empty() {
            return channels;
        }

        let seeded = example_channels();
        if let Err(e) = self.save_channels(&seeded) {
            warn!("Failed to seed {}: {}", self.channels_path().display(), e);
        } else {
            info!("Seeded {} with example channels", CHANNELS_FILE);
        }
        seeded
    }

    pub fn save_channels(&self, channels: &[Channel]) -> Result<(), AddonError> {
        save_json_file(&self.channels_path(), &channels)
    }

    /// Channel name -> logo URL map; empty when the file is absent.
    pub fn load_icons(&self) -> HashMap<String, String> {
        load_json_file(&self.icons_path()).unwrap_or_default()
    }

    /// Headers forwarded to the proxy; `headers.json` overrides the
    /// defaults when present.
    pub fn load_headers(&self) -> StreamHeaders {
        load_json_file(&self.headers_path()).unwrap_or_default()
    }
}

fn example_channels() -> Vec<Channel> {
    [
        ("rai1-example", "Rai 1 .I", "https://example.com/rai1.m3u8", "general"),
        ("canale5-example", "Canale 5 .I", "https://example.com/canale5.m3u8", "general"),
        ("skysport-example", "Sky Sport .I", "https://example.com/skysport.m3u8", "sports"),
        ("discovery-example", "Discovery Channel .I", "https://example.com/discovery.m3u8", "documentary"),
    ]
    .into_iter()
    .map(|(id, name, url, genre)| Channel {
        id: id.to_string(),
        name: name.to_string(),
        url: url.to_string(),
        genre: genre.to_string(),
    })
    .collect()
}

/// Reads a JSON file, returning None when it is missing or unparseable.
pub fn load_json_file<T: DeserializeOwned>(path: &Path) -> Option<T> {
    if !path.exists() {
        return None;
    }
    match fs::read_to_string(path) {
        Ok(text) => match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Failed to parse {}: {}", path.display(), e);
                None
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            None
        }
    }
}

pub fn save_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), AddonError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text)?;
    Ok(())
}
