use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use iptv_models::AddonError;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{info, warn};

pub const FILTERS_FILE: &str = "channel_filters.json";
pub const REMOVE_FILE: &str = "channel_remove.json";
pub const CATEGORIES_FILE: &str = "category_keywords.json";
pub const LOGOS_FILE: &str = "channel_logos.json";

/// Category rules keep their declaration order: the first category whose
/// keyword matches wins, so a map type that sorts keys would change the
/// outcome for names matching several categories.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRules(pub Vec<(String, Vec<String>)>);

impl Serialize for CategoryRules {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, keywords) in &self.0 {
            map.serialize_entry(category, keywords)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategoryRules {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RulesVisitor;

        impl<'de> Visitor<'de> for RulesVisitor {
            type Value = CategoryRules;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category name to keyword list")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut rules = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, Vec<String>>()? {
                    rules.push(entry);
                }
                Ok(CategoryRules(rules))
            }
        }

        deserializer.deserialize_map(RulesVisitor)
    }
}

/// The four curation inputs for playlist generation, each backed by a JSON
/// file next to the playlist output. Missing files are written out with
/// the built-in defaults so they can be edited afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Curation {
    /// Keep-list: a channel must match one of these substrings.
    pub filters: Vec<String>,
    /// Drop-list: channels matching any of these are skipped outright.
    pub remove: Vec<String>,
    pub categories: CategoryRules,
    /// Lowercased raw channel name -> logo URL.
    pub logos: HashMap<String, String>,
}

impl Default for Curation {
    fn default() -> Self {
        Self {
            filters: defaults::channel_filters(),
            remove: defaults::channel_remove(),
            categories: defaults::category_keywords(),
            logos: defaults::channel_logos(),
        }
    }
}

impl Curation {
    /// Loads the curation files from `dir`, writing any missing one back
    /// with its default content.
    pub fn load_or_init(dir: &Path) -> Result<Self, AddonError> {
        Ok(Self {
            filters: load_or_write_default(&dir.join(FILTERS_FILE), defaults::channel_filters)?,
            remove: load_or_write_default(&dir.join(REMOVE_FILE), defaults::channel_remove)?,
            categories: load_or_write_default(&dir.join(CATEGORIES_FILE), defaults::category_keywords)?,
            logos: load_or_write_default(&dir.join(LOGOS_FILE), defaults::channel_logos)?,
        })
    }
}

fn load_or_write_default<T, F>(path: &Path, default: F) -> Result<T, AddonError>
where
    T: Serialize + serde::de::DeserializeOwned,
    F: FnOnce() -> T,
{
    if path.exists() {
        let text = std::fs::read_to_string(path)?;
        match serde_json::from_str(&text) {
            Ok(value) => return Ok(value),
            Err(e) => warn!("Ignoring unparseable {}: {}", path.display(), e),
        }
    }

    let value = default();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    info!("Wrote default {}", path.display());
    Ok(value)
}

pub mod defaults {
    use super::CategoryRules;
    use std::collections::HashMap;

    pub fn channel_filters() -> Vec<String> {
        [
            "sky", "fox", "rai", "cine34", "real time", "crime+ investigation", "top crime",
            "wwe", "tennis", "k2", "inter", "rsi", "la 7", "la7", "la 7d", "la7d",
            "27 twentyseven", "premium crime", "comedy central", "super!", "animal planet",
            "hgtv", "avengers grimm channel", "catfish", "rakuten", "nickelodeon", "cartoonito",
            "nick jr", "history", "nat geo", "tv8", "canale 5", "italia", "mediaset", "rete 4",
            "focus", "iris", "discovery", "dazn", "cine 34", "la 5", "giallo", "dmax", "cielo",
            "eurosport", "disney+", "food", "tv 8", "MOTORTREND", "BOING", "FRISBEE",
            "DEEJAY TV", "CARTOON NETWORK", "TG COM 24", "WARNER TV", "BOING PLUS",
            "27 TWENTY SEVEN", "TGCOM 24", "SKY UNO", "sky uno",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }

    pub fn channel_remove() -> Vec<String> {
        [
            "maria+vision", "telepace", "uninettuno", "lombardia", "cusano", "FM italia",
            "Juwelo", "kiss kiss", "qvc", "rete tv", "italia 3", "fishing", "inter tv",
            "avengers",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }

    pub fn category_keywords() -> CategoryRules {
        let rules = [
            (
                "SKY",
                vec![
                    "sky cin", "tv 8", "fox", "comedy central", "animal planet", "nat geo",
                    "tv8", "sky atl", "sky uno", "sky prima", "sky serie", "sky arte",
                    "sky docum", "sky natu", "cielo", "history", "sky tg",
                ],
            ),
            ("RAI", vec!["rai"]),
            (
                "MEDIASET",
                vec![
                    "mediaset", "canale 5", "rete 4", "italia", "focus", "tg com 24",
                    "tgcom 24", "premium crime", "iris", "mediaset iris", "cine 34",
                    "27 twenty seven", "27 twentyseven",
                ],
            ),
            (
                "DISCOVERY",
                vec![
                    "discovery", "real time", "investigation", "top crime", "wwe", "hgtv",
                    "nove", "dmax", "food network", "warner tv",
                ],
            ),
            (
                "SPORT",
                vec![
                    "sport", "dazn", "tennis", "moto", "f1", "golf", "sportitalia",
                    "sport italia", "solo calcio", "solocalcio",
                ],
            ),
            ("ALTRI", vec![]),
            (
                "BAMBINI",
                vec!["boing", "cartoon", "k2", "discovery k2", "nick", "super", "frisbee"],
            ),
        ];

        CategoryRules(
            rules
                .into_iter()
                .map(|(category, keywords)| {
                    (
                        category.to_string(),
                        keywords.into_iter().map(String::from).collect(),
                    )
                })
                .collect(),
        )
    }

    pub fn channel_logos() -> HashMap<String, String> {
        [
            (
                "sky uno .c",
                "https://raw.githubusercontent.com/tv-logo/tv-logos/main/countries/italy/sky-uno-it.png",
            ),
            (
                "rai 1 .c",
                "https://raw.githubusercontent.com/tv-logo/tv-logos/main/countries/italy/rai-1-it.png",
            ),
        ]
        .into_iter()
        .map(|(name, url)| (name.to_string(), url.to_string()))
        .collect()
    }
}
