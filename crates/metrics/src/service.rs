use iptv_models::AddonError;
use prometheus::{Counter, Encoder, Registry, TextEncoder};

pub struct MetricsService {
    registry: Registry,
    manifest_requests_total: Counter,
    catalog_requests_total: Counter,
    meta_requests_total: Counter,
    stream_requests_total: Counter,
}

impl MetricsService {
    pub fn new() -> Result<Self, AddonError> {
        let registry = Registry::new();

        let manifest_requests_total = Counter::new(
            "iptv_manifest_requests_total",
            "Total number of manifest requests",
        )
        .map_err(internal)?;

        let catalog_requests_total = Counter::new(
            "iptv_catalog_requests_total",
            "Total number of catalog requests",
        )
        .map_err(internal)?;

        let meta_requests_total =
            Counter::new("iptv_meta_requests_total", "Total number of meta requests")
                .map_err(internal)?;

        let stream_requests_total = Counter::new(
            "iptv_stream_requests_total",
            "Total number of stream requests",
        )
        .map_err(internal)?;

        registry
            .register(Box::new(manifest_requests_total.clone()))
            .map_err(internal)?;
        registry
            .register(Box::new(catalog_requests_total.clone()))
            .map_err(internal)?;
        registry
            .register(Box::new(meta_requests_total.clone()))
            .map_err(internal)?;
        registry
            .register(Box::new(stream_requests_total.clone()))
            .map_err(internal)?;

        Ok(Self {
            registry,
            manifest_requests_total,
            catalog_requests_total,
            meta_requests_total,
            stream_requests_total,
        })
    }

    pub fn record_manifest_request(&self) {
        self.manifest_requests_total.inc();
    }

    pub fn record_catalog_request(&self) {
        self.catalog_requests_total.inc();
    }

    pub fn record_meta_request(&self) {
        self.meta_requests_total.inc();
    }

    pub fn record_stream_request(&self) {
        self.stream_requests_total.inc();
    }

    /// Prometheus text exposition for the scrape endpoint.
    pub fn render(&self) -> Result<String, AddonError> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(internal)?;
        String::from_utf8(buffer).map_err(internal)
    }
}

fn internal<E: std::fmt::Display>(e: E) -> AddonError {
    AddonError::InternalError {
        reason: e.to_string(),
    }
}
