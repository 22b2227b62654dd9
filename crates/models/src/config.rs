use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::AddonError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub server: ServerConfig,
    pub mediaflow: MediaflowConfig,
    pub data: DataConfig,
    pub upstream: UpstreamConfig,
    pub cache: CacheConfig,
    pub playlist: PlaylistConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    /// External hostname used when generating Stremio install links.
    pub domain: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MediaflowConfig {
    pub default_url: String,
    pub default_psw: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    pub dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct UpstreamConfig {
    pub ping_url: String,
    pub catalog_url: String,
    pub resolve_url: String,
    pub group: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    pub channels_ttl_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PlaylistConfig {
    pub output: String,
    pub epg_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind: "0.0.0.0".to_string(),
                port: 3000,
                domain: "melatv0bug.duckdns.org".to_string(),
            },
            mediaflow: MediaflowConfig {
                default_url: "".to_string(),
                default_psw: "".to_string(),
            },
            data: DataConfig {
                dir: "data".to_string(),
            },
            upstream: UpstreamConfig {
                ping_url: "https://www.vavoo.tv/api/app/ping".to_string(),
                catalog_url: "https://vavoo.to/vto-cluster/mediahubmx-catalog.json".to_string(),
                resolve_url: "https://vavoo.to/vto-cluster/mediahubmx-resolve.json".to_string(),
                group: "Italy".to_string(),
            },
            cache: CacheConfig {
                channels_ttl_secs: 3600,
            },
            playlist: PlaylistConfig {
                output: "channels.m3u8".to_string(),
                epg_url: "http://epg-guide.com/it.gz".to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from a TOML file merged over the defaults, with
    /// `IPTV_`-prefixed environment overrides (`IPTV_SERVER__PORT`, ...).
    pub fn load(path: &str) -> Result<Self, AddonError> {
        let mut config: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            // IPTV_CONFIG selects the file itself and is not a config key
            .merge(Env::prefixed("IPTV_").ignore(&["config"]).split("__"))
            .extract()
            .map_err(|e| AddonError::ConfigError {
                reason: e.to_string(),
            })?;

        config.apply_legacy_env();
        Ok(config)
    }

    // The deployment contract predates the prefixed scheme: PORT, DOMAIN and
    // the MEDIAFLOW_DEFAULT_* pair are honored as-is.
    fn apply_legacy_env(&mut self) {
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Ok(domain) = std::env::var("DOMAIN") {
            self.server.domain = domain;
        }
        if let Ok(url) = std::env::var("MEDIAFLOW_DEFAULT_URL") {
            self.mediaflow.default_url = url;
        }
        if let Ok(psw) = std::env::var("MEDIAFLOW_DEFAULT_PSW") {
            self.mediaflow.default_psw = psw;
        }
    }
}
