#![cfg(feature = "live_tests")]

use iptv_testsupport::*;

#[ignore]
#[tokio::test(flavor = "multi_thread")]
async fn addon_flow_over_http() -> anyhow::Result<()> {
    let mut daemon = spawn_daemon(Some(ConfigOverride {
        port: Some(3101),
        mediaflow_url: Some("mfp.example.org".to_string()),
        mediaflow_psw: Some("secret".to_string()),
    }))
    .await?;
    let client = AddonClient::new(daemon.base_url.clone());

    // path-supplied creds override the configured defaults
    let manifest = client.manifest_with_creds("other.example.org", "pw").await?;
    assert!(manifest.description.contains("other.example.org"));

    // the fresh data dir is seeded with example channels
    let catalog = client.catalog("mfp.example.org", "secret", "general").await?;
    let metas = catalog["metas"].as_array().unwrap();
    assert_eq!(metas.len(), 2);

    let first_id = metas[0]["id"].as_str().unwrap().to_string();
    let stream = client.stream("mfp.example.org", "secret", &first_id).await?;
    let streams = stream["streams"].as_array().unwrap();
    assert_eq!(streams.len(), 1);
    assert!(streams[0]["url"]
        .as_str()
        .unwrap()
        .contains("/proxy/hls/manifest.m3u8?"));

    daemon.kill().await?;
    Ok(())
}
