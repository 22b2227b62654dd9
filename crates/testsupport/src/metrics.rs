use std::collections::HashMap;

use anyhow::Result;

/// Parsed Prometheus text exposition, just enough for assertions.
#[derive(Debug, Default)]
pub struct Metrics {
    pub counters: HashMap<String, f64>,
    pub histogram_sums: HashMap<String, f64>,
    pub histogram_counts: HashMap<String, f64>,
}

pub fn prom_parse(text: &str) -> Result<Metrics> {
    let mut metrics = Metrics::default();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((name, value)) = line.split_once(' ') else {
            continue;
        };
        let Ok(value) = value.trim().parse::<f64>() else {
            continue;
        };

        if let Some(base) = name.strip_suffix("_sum") {
            metrics.histogram_sums.insert(base.to_string(), value);
        } else if let Some(base) = name.strip_suffix("_count") {
            metrics.histogram_counts.insert(base.to_string(), value);
        } else if !name.contains('{') {
            metrics.counters.insert(name.to_string(), value);
        }
    }

    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prom_parse() {
        let text = r#"
# HELP iptv_catalog_requests_total Total number of catalog requests
# TYPE iptv_catalog_requests_total counter
iptv_catalog_requests_total 3
# TYPE iptv_upstream_duration_ms histogram
iptv_upstream_duration_ms_bucket{le="+Inf"} 2
iptv_upstream_duration_ms_sum 81.5
iptv_upstream_duration_ms_count 2
"#;

        let metrics = prom_parse(text).unwrap();
        assert_eq!(metrics.counters.get("iptv_catalog_requests_total"), Some(&3.0));
        assert_eq!(metrics.histogram_sums.get("iptv_upstream_duration_ms"), Some(&81.5));
        assert_eq!(metrics.histogram_counts.get("iptv_upstream_duration_ms"), Some(&2.0));
    }
}
