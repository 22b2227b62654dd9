use std::time::{Duration, Instant};

use iptv_models::Channel;
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

use crate::store::ChannelStore;

struct CacheState {
    channels: Vec<Channel>,
    refreshed_at: Option<Instant>,
}

/// TTL cache over the channel list so the data file is not re-read on
/// every catalog request.
pub struct ChannelCache {
    store: ChannelStore,
    ttl: Duration,
    state: Mutex<CacheState>,
}

impl ChannelCache {
    pub fn new(store: ChannelStore, ttl: Duration) -> Self {
        Self {
            store,
            ttl,
            state: Mutex::new(CacheState {
                channels: Vec::new(),
                refreshed_at: None,
            }),
        }
    }

    /// Returns the cached channel list, reloading from the store when the
    /// entry is stale or was never filled. A reload that comes back empty
    /// keeps the previous list.
    #[instrument(skip(self))]
    pub async fn get_or_reload(&self) -> Vec<Channel> {
        let mut state = self.state.lock().await;

        let stale = state.channels.is_empty()
            || state
                .refreshed_at
                .map_or(true, |at| at.elapsed() > self.ttl);

        if stale {
            info!("Reloading channel list from store");
            let loaded = self.store.load_channels();
            if loaded.is_empty() && !state.channels.is_empty() {
                warn!("Channel reload returned nothing, keeping previous list");
            } else {
                state.channels = loaded;
            }
            state.refreshed_at = Some(Instant::now());
        }

        state.channels.clone()
    }

    /// Drops the cached list so the next read hits the store.
    pub async fn invalidate(&self) {
        let mut state = self.state.lock().await;
        state.channels.clear();
        state.refreshed_at = None;
    }
}
