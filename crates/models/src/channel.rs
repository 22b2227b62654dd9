use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Genres the addon exposes as catalogs, in manifest order.
pub const AVAILABLE_GENRES: &[&str] = &[
    "animation",
    "business",
    "classic",
    "comedy",
    "cooking",
    "culture",
    "documentary",
    "education",
    "entertainment",
    "family",
    "kids",
    "legislative",
    "lifestyle",
    "movies",
    "music",
    "general",
    "religious",
    "news",
    "outdoor",
    "relax",
    "series",
    "science",
    "shop",
    "sports",
    "travel",
    "weather",
    "xxx",
    "auto",
];

pub const STOCK_LOGO: &str = "https://dl.strem.io/addon-logo.png";
pub const STOCK_BACKGROUND: &str = "https://dl.strem.io/addon-background.jpg";

/// A channel row as persisted in `channels_data.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default = "default_genre")]
    pub genre: String,
}

fn default_genre() -> String {
    "general".to_string()
}

/// MediaFlow proxy target for a request, either path-supplied or the
/// configured defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaflowCreds {
    pub url: String,
    pub password: String,
}

impl MediaflowCreds {
    pub fn is_empty(&self) -> bool {
        self.url.is_empty() || self.password.is_empty()
    }
}

/// HTTP headers forwarded to the MediaFlow proxy alongside the stream URL.
/// Loaded from `headers.json` when present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StreamHeaders {
    #[serde(rename = "user-agent")]
    pub user_agent: String,
    pub referer: String,
    pub origin: String,
}

impl Default for StreamHeaders {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/133.0.0.0 Safari/537.36"
                .to_string(),
            referer: "https://vavoo.to/".to_string(),
            origin: "https://vavoo.to".to_string(),
        }
    }
}

/// Strips a trailing `" .X"` marker (space, dot, single letter) that the
/// upstream appends to channel names, e.g. `"Rai 1 .I"` -> `"Rai 1"`.
pub fn clean_channel_name(name: &str) -> &str {
    if name.chars().count() > 3 {
        let mut tail = name.chars().rev();
        if let (Some(letter), Some('.'), Some(space)) = (tail.next(), tail.next(), tail.next()) {
            if letter.is_ascii_alphabetic() && space.is_whitespace() {
                let cut = name.len() - (letter.len_utf8() + '.'.len_utf8() + space.len_utf8());
                return &name[..cut];
            }
        }
    }
    name
}

/// Generates a channel id from its name: lowercased alphanumerics plus a
/// timestamp and a 4-digit random suffix, e.g. `rai1-1728674705-4821`.
pub fn generate_channel_id(name: &str) -> String {
    let clean: String = clean_channel_name(name)
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    let suffix = rand::thread_rng().gen_range(1000..=9999);
    format!("{}-{}-{}", clean, Utc::now().timestamp(), suffix)
}

/// Builds the MediaFlow proxy URL for a channel. Query values use form
/// encoding (`+` for spaces), which is what the proxy expects.
pub fn proxy_stream_url(creds: &MediaflowCreds, channel_url: &str, headers: &StreamHeaders) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("api_password", &creds.password)
        .append_pair("d", channel_url)
        .append_pair("h_user-agent", &headers.user_agent)
        .append_pair("h_referer", &headers.referer)
        .append_pair("h_origin", &headers.origin)
        .finish();
    format!("https://{}/proxy/hls/manifest.m3u8?{}", creds.url, query)
}
