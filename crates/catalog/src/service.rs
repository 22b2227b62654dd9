use std::collections::HashMap;
use std::time::Duration;

use iptv_models::{
    clean_channel_name, proxy_stream_url, Channel, ChannelMeta, MediaflowCreds, StreamHeaders,
    StreamInfo, CATALOG_PREFIX, STOCK_LOGO,
};
use tracing::instrument;

use crate::cache::ChannelCache;
use crate::store::ChannelStore;

/// Catalog assembly: turns stored channels into Stremio metas addressed
/// through the caller's MediaFlow proxy.
pub struct CatalogService {
    store: ChannelStore,
    cache: ChannelCache,
}

impl CatalogService {
    pub fn new(store: ChannelStore, channels_ttl: Duration) -> Self {
        let cache = ChannelCache::new(store.clone(), channels_ttl);
        Self { store, cache }
    }

    pub fn store(&self) -> &ChannelStore {
        &self.store
    }

    pub fn cache(&self) -> &ChannelCache {
        &self.cache
    }

    /// Every channel as a meta object. Without proxy credentials there is
    /// nothing playable to offer, so the list is empty.
    #[instrument(skip(self, creds))]
    pub async fn all_channel_metas(&self, creds: &MediaflowCreds) -> Vec<ChannelMeta> {
        if creds.is_empty() {
            return Vec::new();
        }

        let channels = self.cache.get_or_reload().await;
        let icons = self.store.load_icons();
        let headers = self.store.load_headers();

        channels
            .iter()
            .map(|channel| to_meta(channel, creds, &icons, &headers))
            .collect()
    }

    /// Catalog listing for one genre. A search term scans every channel
    /// name instead of the genre slice.
    #[instrument(skip(self, creds))]
    pub async fn catalog(
        &self,
        creds: &MediaflowCreds,
        genre: &str,
        search: Option<&str>,
    ) -> Vec<ChannelMeta> {
        let all = self.all_channel_metas(creds).await;

        match search {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                all.into_iter()
                    .filter(|meta| meta.name.to_lowercase().contains(&term))
                    .collect()
            }
            _ => all
                .into_iter()
                .filter(|meta| meta.genres.iter().any(|g| g == genre))
                .collect(),
        }
    }

    #[instrument(skip(self, creds))]
    pub async fn meta(&self, creds: &MediaflowCreds, id: &str) -> Option<ChannelMeta> {
        self.all_channel_metas(creds)
            .await
            .into_iter()
            .find(|meta| meta.id == id)
    }

    #[instrument(skip(self, creds))]
    pub async fn stream(&self, creds: &MediaflowCreds, id: &str) -> Option<StreamInfo> {
        self.meta(creds, id).await.map(|meta| meta.stream_info)
    }
}

/// Builds the Stremio meta for a channel: cleaned display name, icon by
/// cleaned-then-raw name lookup, stream URL routed through the proxy.
pub fn to_meta(
    channel: &Channel,
    creds: &MediaflowCreds,
    icons: &HashMap<String, String>,
    headers: &StreamHeaders,
) -> ChannelMeta {
    let name = clean_channel_name(&channel.name);
    let logo = icons
        .get(name)
        .or_else(|| icons.get(&channel.name))
        .cloned()
        .unwrap_or_else(|| STOCK_LOGO.to_string());

    let stream_url = proxy_stream_url(creds, &channel.url, headers);

    ChannelMeta {
        id: format!("{CATALOG_PREFIX}{}", channel.id),
        name: name.to_string(),
        meta_type: "tv".to_string(),
        genres: vec![channel.genre.clone()],
        poster: logo.clone(),
        poster_shape: "square".to_string(),
        background: logo.clone(),
        logo,
        stream_info: StreamInfo {
            url: stream_url,
            title: name.to_string(),
        },
    }
}
