use iptv_models::UpstreamConfig;
use iptv_vavoo::VavooClient;

fn test_config() -> UpstreamConfig {
    UpstreamConfig {
        ping_url: "https://upstream.invalid/ping".to_string(),
        catalog_url: "https://upstream.invalid/catalog".to_string(),
        resolve_url: "https://upstream.invalid/resolve".to_string(),
        group: "Italy".to_string(),
    }
}

#[tokio::test]
async fn resolve_passes_localhost_links_through() {
    let client = VavooClient::new(test_config());
    // never hits the network, so the .invalid endpoints don't matter
    let resolved = client
        .resolve_link("http://localhost:8080/stream.m3u8", "sig")
        .await
        .unwrap();
    assert_eq!(resolved, "http://localhost:8080/stream.m3u8");
}
