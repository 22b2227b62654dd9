pub mod service;

pub use service::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_render_exposes_counters() {
        let metrics = MetricsService::new().unwrap();
        metrics.record_catalog_request();
        metrics.record_catalog_request();
        metrics.record_stream_request();

        let text = metrics.render().unwrap();
        assert!(text.contains("iptv_catalog_requests_total 2"));
        assert!(text.contains("iptv_stream_requests_total 1"));
        assert!(text.contains("iptv_manifest_requests_total 0"));
    }
}
