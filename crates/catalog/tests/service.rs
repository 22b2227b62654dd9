use std::time::Duration;

use iptv_catalog::{CatalogService, ChannelStore};
use iptv_models::{Channel, MediaflowCreds};

fn creds() -> MediaflowCreds {
    MediaflowCreds {
        url: "mfp.example.org".to_string(),
        password: "secret".to_string(),
    }
}

fn store_with_channels(dir: &std::path::Path) -> ChannelStore {
    let store = ChannelStore::new(dir);
    store
        .save_channels(&[
            Channel {
                id: "rai1".to_string(),
                name: "Rai 1 .I".to_string(),
                url: "https://example.com/rai1.m3u8".to_string(),
                genre: "general".to_string(),
            },
            Channel {
                id: "skysport".to_string(),
                name: "Sky Sport .I".to_string(),
                url: "https://example.com/skysport.m3u8".to_string(),
                genre: "sports".to_string(),
            },
            Channel {
                id: "tgnews".to_string(),
                name: "TG News 24 .I".to_string(),
                url: "https://example.com/tg24.m3u8".to_string(),
                genre: "news".to_string(),
            },
        ])
        .unwrap();
    store
}

#[tokio::test]
async fn empty_creds_yield_no_metas() {
    let dir = tempfile::tempdir().unwrap();
    let service = CatalogService::new(store_with_channels(dir.path()), Duration::from_secs(3600));

    let no_url = MediaflowCreds {
        url: "".to_string(),
        password: "secret".to_string(),
    };
    assert!(service.all_channel_metas(&no_url).await.is_empty());

    let no_psw = MediaflowCreds {
        url: "mfp.example.org".to_string(),
        password: "".to_string(),
    };
    assert!(service.all_channel_metas(&no_psw).await.is_empty());
}

#[tokio::test]
async fn catalog_filters_by_genre() {
    let dir = tempfile::tempdir().unwrap();
    let service = CatalogService::new(store_with_channels(dir.path()), Duration::from_secs(3600));

    let sports = service.catalog(&creds(), "sports", None).await;
    assert_eq!(sports.len(), 1);
    assert_eq!(sports[0].name, "Sky Sport");

    let cooking = service.catalog(&creds(), "cooking", None).await;
    assert!(cooking.is_empty());
}

#[tokio::test]
async fn search_scans_all_channels_regardless_of_genre() {
    let dir = tempfile::tempdir().unwrap();
    let service = CatalogService::new(store_with_channels(dir.path()), Duration::from_secs(3600));

    // searching within the sports catalog still finds a news channel
    let hits = service.catalog(&creds(), "sports", Some("news")).await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "TG News 24");

    let none = service.catalog(&creds(), "sports", Some("zzz")).await;
    assert!(none.is_empty());
}

#[tokio::test]
async fn meta_and_stream_lookup_by_id() {
    let dir = tempfile::tempdir().unwrap();
    let service = CatalogService::new(store_with_channels(dir.path()), Duration::from_secs(3600));

    let meta = service.meta(&creds(), "mediaflow-rai1").await.unwrap();
    assert_eq!(meta.name, "Rai 1");
    assert_eq!(meta.genres, vec!["general".to_string()]);

    let stream = service.stream(&creds(), "mediaflow-rai1").await.unwrap();
    assert!(stream
        .url
        .starts_with("https://mfp.example.org/proxy/hls/manifest.m3u8?"));
    assert!(stream.url.contains("api_password=secret"));
    assert_eq!(stream.title, "Rai 1");

    assert!(service.meta(&creds(), "mediaflow-nope").await.is_none());
    assert!(service.stream(&creds(), "mediaflow-nope").await.is_none());
}

#[tokio::test]
async fn icons_resolve_by_cleaned_name_first() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_with_channels(dir.path());
    std::fs::write(
        store.icons_path(),
        r#"{"Rai 1": "https://logos.example/rai1.png", "Sky Sport .I": "https://logos.example/sky-raw.png"}"#,
    )
    .unwrap();
    let service = CatalogService::new(store, Duration::from_secs(3600));

    let metas = service.all_channel_metas(&creds()).await;
    let rai = metas.iter().find(|m| m.name == "Rai 1").unwrap();
    assert_eq!(rai.logo, "https://logos.example/rai1.png");

    // falls back to the raw (uncleaned) name
    let sky = metas.iter().find(|m| m.name == "Sky Sport").unwrap();
    assert_eq!(sky.logo, "https://logos.example/sky-raw.png");

    // no icon configured -> stock logo
    let tg = metas.iter().find(|m| m.name == "TG News 24").unwrap();
    assert_eq!(tg.logo, "https://dl.strem.io/addon-logo.png");
}

#[tokio::test]
async fn cache_serves_stale_data_until_invalidated() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_with_channels(dir.path());
    let service = CatalogService::new(store.clone(), Duration::from_secs(3600));

    let before = service.all_channel_metas(&creds()).await;
    assert_eq!(before.len(), 3);

    // mutate the file behind the cache's back
    store
        .save_channels(&[Channel {
            id: "only".to_string(),
            name: "Only One .I".to_string(),
            url: "https://example.com/one.m3u8".to_string(),
            genre: "general".to_string(),
        }])
        .unwrap();

    // still within TTL: the old list is served
    let cached = service.all_channel_metas(&creds()).await;
    assert_eq!(cached.len(), 3);

    service.cache().invalidate().await;
    let after = service.all_channel_metas(&creds()).await;
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].name, "Only One");
}
