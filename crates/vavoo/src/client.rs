use iptv_models::{AddonError, UpstreamConfig};
use tracing::{info, instrument, warn};

use crate::wire::{
    signature_ping_payload, CatalogPage, CatalogRequest, PingResponse, ResolveRequest,
    ResolvedLink, VavooItem,
};

const PING_USER_AGENT: &str = "okhttp/4.11.0";
const CLUSTER_USER_AGENT: &str = "MediaHubMX/2";
const SIGNATURE_HEADER: &str = "mediahubmx-signature";

/// Client for the Vavoo catalog cluster: signature handshake, paginated
/// catalog listing and stream-link resolution.
#[derive(Clone)]
pub struct VavooClient {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl VavooClient {
    pub fn new(config: UpstreamConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Performs the app-ping handshake and returns the addon signature the
    /// cluster endpoints require.
    #[instrument(skip(self))]
    pub async fn fetch_signature(&self) -> Result<String, AddonError> {
        let response = self
            .http
            .post(&self.config.ping_url)
            .header(reqwest::header::USER_AGENT, PING_USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&signature_ping_payload())
            .send()
            .await
            .map_err(upstream_err)?
            .error_for_status()
            .map_err(upstream_err)?;

        let ping: PingResponse = response.json().await.map_err(upstream_err)?;
        ping.addon_sig.ok_or(AddonError::MissingSignature)
    }

    /// Fetches one catalog page. The cursor is an item offset; an empty
    /// page marks the end of the listing.
    #[instrument(skip(self, signature))]
    pub async fn fetch_catalog_page(
        &self,
        signature: &str,
        cursor: usize,
    ) -> Result<Vec<VavooItem>, AddonError> {
        let request = CatalogRequest::page(&self.config.group, cursor);
        let response = self
            .http
            .post(&self.config.catalog_url)
            .header(reqwest::header::USER_AGENT, CLUSTER_USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(SIGNATURE_HEADER, signature)
            .json(&request)
            .send()
            .await
            .map_err(upstream_err)?
            .error_for_status()
            .map_err(upstream_err)?;

        let page: CatalogPage = response.json().await.map_err(upstream_err)?;
        Ok(page.items)
    }

    /// Walks the catalog from cursor 0 until an empty page. A failed page
    /// ends the walk and returns what was collected so far.
    #[instrument(skip(self, signature))]
    pub async fn fetch_all_channels(&self, signature: &str) -> Vec<VavooItem> {
        let mut all_items = Vec::new();
        let mut cursor = 0;

        loop {
            match self.fetch_catalog_page(signature, cursor).await {
                Ok(items) => {
                    if items.is_empty() {
                        break;
                    }
                    cursor += items.len();
                    all_items.extend(items);
                }
                Err(e) => {
                    warn!("Catalog page fetch failed at cursor {}: {}", cursor, e);
                    break;
                }
            }
        }

        info!("Fetched {} channels from upstream catalog", all_items.len());
        all_items
    }

    /// Resolves a channel link to its playable stream URL. Local links are
    /// returned unchanged without touching the network.
    #[instrument(skip(self, signature))]
    pub async fn resolve_link(&self, link: &str, signature: &str) -> Result<String, AddonError> {
        if link.contains("localhost") {
            return Ok(link.to_string());
        }

        let response = self
            .http
            .post(&self.config.resolve_url)
            .header(reqwest::header::USER_AGENT, CLUSTER_USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(SIGNATURE_HEADER, signature)
            .json(&ResolveRequest::for_url(link))
            .send()
            .await
            .map_err(upstream_err)?
            .error_for_status()
            .map_err(upstream_err)?;

        let resolved: Vec<ResolvedLink> = response.json().await.map_err(upstream_err)?;
        resolved
            .into_iter()
            .next()
            .and_then(|r| r.url)
            .ok_or_else(|| AddonError::UnresolvedLink {
                url: link.to_string(),
            })
    }
}

fn upstream_err(e: reqwest::Error) -> AddonError {
    AddonError::UpstreamError {
        reason: e.to_string(),
    }
}
