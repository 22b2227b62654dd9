use std::sync::Arc;

use iptv_catalog::CatalogService;
use iptv_metrics::MetricsService;
use iptv_models::{Config, MediaflowCreds};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<CatalogService>,
    pub metrics: Arc<MetricsService>,
}

impl AppState {
    pub fn new(config: Config, catalog: Arc<CatalogService>, metrics: Arc<MetricsService>) -> Self {
        Self {
            config,
            catalog,
            metrics,
        }
    }

    /// The configured fallback proxy credentials.
    pub fn default_creds(&self) -> MediaflowCreds {
        MediaflowCreds {
            url: self.config.mediaflow.default_url.clone(),
            password: self.config.mediaflow.default_psw.clone(),
        }
    }
}
