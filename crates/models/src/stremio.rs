use serde::{Deserialize, Serialize, Serializer};

use crate::channel::{AVAILABLE_GENRES, STOCK_BACKGROUND, STOCK_LOGO};

pub const ADDON_ID: &str = "org.mediaflow.iptv";
pub const ADDON_VERSION: &str = "1.0.0";
pub const CATALOG_PREFIX: &str = "mediaflow-";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub id: String,
    pub name: String,
    pub version: String,
    pub description: String,
    pub resources: Vec<String>,
    pub types: Vec<String>,
    pub catalogs: Vec<ManifestCatalog>,
    #[serde(rename = "idPrefixes")]
    pub id_prefixes: Vec<String>,
    #[serde(rename = "behaviorHints")]
    pub behavior_hints: BehaviorHints,
    pub logo: String,
    pub icon: String,
    pub background: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestCatalog {
    #[serde(rename = "type")]
    pub catalog_type: String,
    pub id: String,
    pub name: String,
    pub extra: Vec<CatalogExtra>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogExtra {
    pub name: String,
    #[serde(rename = "isRequired")]
    pub is_required: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorHints {
    pub configurable: bool,
    #[serde(rename = "configurationRequired")]
    pub configuration_required: bool,
}

impl Manifest {
    /// Addon manifest advertising one catalog per available genre.
    pub fn new(mediaflow_url: &str) -> Self {
        let catalogs = AVAILABLE_GENRES
            .iter()
            .map(|genre| ManifestCatalog {
                catalog_type: "tv".to_string(),
                id: format!("{CATALOG_PREFIX}{genre}"),
                name: format!("MediaFlow - {}", capitalize(genre)),
                extra: vec![CatalogExtra {
                    name: "search".to_string(),
                    is_required: false,
                }],
            })
            .collect();

        Self {
            id: ADDON_ID.to_string(),
            name: "MediaFlow IPTV".to_string(),
            version: ADDON_VERSION.to_string(),
            description: format!("Watch IPTV channels from MediaFlow service ({mediaflow_url})"),
            resources: vec![
                "catalog".to_string(),
                "meta".to_string(),
                "stream".to_string(),
            ],
            types: vec!["tv".to_string()],
            catalogs,
            id_prefixes: vec![CATALOG_PREFIX.to_string()],
            behavior_hints: BehaviorHints {
                configurable: false,
                configuration_required: false,
            },
            logo: STOCK_LOGO.to_string(),
            icon: STOCK_LOGO.to_string(),
            background: STOCK_BACKGROUND.to_string(),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StreamInfo {
    pub url: String,
    pub title: String,
}

/// A channel rendered as a Stremio meta object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelMeta {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub meta_type: String,
    pub genres: Vec<String>,
    pub poster: String,
    #[serde(rename = "posterShape")]
    pub poster_shape: String,
    pub background: String,
    pub logo: String,
    #[serde(rename = "streamInfo")]
    pub stream_info: StreamInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub metas: Vec<ChannelMeta>,
}

/// Stremio expects `{"meta": {}}` rather than an error for unknown ids.
#[derive(Debug, Clone, Serialize)]
pub struct MetaResponse {
    #[serde(serialize_with = "meta_or_empty_object")]
    pub meta: Option<ChannelMeta>,
}

fn meta_or_empty_object<S>(meta: &Option<ChannelMeta>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match meta {
        Some(meta) => meta.serialize(serializer),
        None => serde_json::Map::new().serialize(serializer),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StreamResponse {
    pub streams: Vec<StreamInfo>,
}

/// Parses a catalog id of the form `mediaflow-{genre}`. The original id
/// grammar splits on `-` and takes the second token, so a compound tail
/// is truncated at the first dash.
pub fn parse_catalog_genre(id: &str) -> Option<&str> {
    id.strip_prefix(CATALOG_PREFIX)
        .map(|rest| rest.split('-').next().unwrap_or(rest))
}
