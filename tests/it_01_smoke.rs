#![cfg(feature = "live_tests")]

use iptv_testsupport::*;

#[ignore]
#[tokio::test(flavor = "multi_thread")]
async fn smoke_test() -> anyhow::Result<()> {
    let mut daemon = spawn_daemon(Some(ConfigOverride {
        port: Some(3100),
        ..Default::default()
    }))
    .await?;
    let client = AddonClient::new(daemon.base_url.clone());

    assert_eq!(client.healthz().await?, "OK");

    let metrics_text = client.metrics().await?;
    assert!(metrics_text.contains("iptv_catalog_requests_total"));
    let metrics = prom_parse(&metrics_text)?;
    assert!(metrics.counters.contains_key("iptv_catalog_requests_total"));

    let manifest = client.manifest().await?;
    assert_eq!(manifest.id, "org.mediaflow.iptv");
    assert_eq!(manifest.catalogs.len(), 28);

    daemon.kill().await?;
    Ok(())
}
