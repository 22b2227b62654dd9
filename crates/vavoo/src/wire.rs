use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One catalog row as returned by the cluster endpoint. Upstream items
/// carry more fields than we consume; serde drops the rest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VavooItem {
    #[serde(default = "unknown_name")]
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

fn unknown_name() -> String {
    "Unknown".to_string()
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogPage {
    #[serde(default)]
    pub items: Vec<VavooItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogRequest {
    pub language: String,
    pub region: String,
    #[serde(rename = "catalogId")]
    pub catalog_id: String,
    pub id: String,
    pub adult: bool,
    pub search: String,
    pub sort: String,
    pub filter: CatalogFilter,
    pub cursor: usize,
    #[serde(rename = "clientVersion")]
    pub client_version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogFilter {
    pub group: String,
}

impl CatalogRequest {
    pub fn page(group: &str, cursor: usize) -> Self {
        Self {
            language: "de".to_string(),
            region: "AT".to_string(),
            catalog_id: "vto-iptv".to_string(),
            id: "vto-iptv".to_string(),
            adult: false,
            search: "".to_string(),
            sort: "name".to_string(),
            filter: CatalogFilter {
                group: group.to_string(),
            },
            cursor,
            client_version: "3.0.2".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolveRequest {
    pub language: String,
    pub region: String,
    pub url: String,
    #[serde(rename = "clientVersion")]
    pub client_version: String,
}

impl ResolveRequest {
    pub fn for_url(url: &str) -> Self {
        Self {
            language: "de".to_string(),
            region: "AT".to_string(),
            url: url.to_string(),
            client_version: "3.0.2".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolvedLink {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PingResponse {
    #[serde(rename = "addonSig")]
    pub addon_sig: Option<String>,
}

/// Fixed device/app fingerprint the ping endpoint expects before it hands
/// out an addon signature. Field values track the upstream Android client.
pub fn signature_ping_payload() -> Value {
    json!({
        "token": "8Us2TfjeOFrzqFFTEjL3E5KfdAWGa5PV3wQe60uK4BmzlkJRMYFu0ufaM_eeDXKS2U04XUuhbDTgGRJrJARUwzDyCcRToXhW5AcDekfFMfwNUjuieeQ1uzeDB9YWyBL2cn5Al3L3gTnF8Vk1t7rPwkBob0swvxA",
        "reason": "player.enter",
        "locale": "de",
        "theme": "dark",
        "metadata": {
            "device": {
                "type": "Handset",
                "brand": "google",
                "model": "Nexus 5",
                "name": "21081111RG",
                "uniqueId": "d10e5d99ab665233"
            },
            "os": {
                "name": "android",
                "version": "7.1.2",
                "abis": ["arm64-v8a", "armeabi-v7a", "armeabi"],
                "host": "android"
            },
            "app": {
                "platform": "android",
                "version": "3.0.2",
                "buildId": "288045000",
                "engine": "jsc",
                "signatures": ["09f4e07040149486e541a1cb34000b6e12527265252fa2178dfe2bd1af6b815a"],
                "installer": "com.android.secex"
            },
            "version": {
                "package": "tv.vavoo.app",
                "binary": "3.0.2",
                "js": "3.1.4"
            }
        },
        "appFocusTime": 27229,
        "playerActive": true,
        "playDuration": 0,
        "devMode": false,
        "hasAddon": true,
        "castConnected": false,
        "package": "tv.vavoo.app",
        "version": "3.1.4",
        "process": "app",
        "firstAppStart": 1728674705639u64,
        "lastAppStart": 1728674705639u64,
        "ipLocation": "",
        "adblockEnabled": true,
        "proxy": {
            "supported": ["ss"],
            "engine": "ss",
            "enabled": false,
            "autoServer": true,
            "id": "ca-bhs"
        },
        "iap": {
            "supported": false
        }
    })
}
