pub mod client;
pub mod wire;

pub use client::*;
pub use wire::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_request_field_names() {
        let request = CatalogRequest::page("Italy", 120);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["catalogId"], "vto-iptv");
        assert_eq!(json["clientVersion"], "3.0.2");
        assert_eq!(json["filter"]["group"], "Italy");
        assert_eq!(json["cursor"], 120);
        assert_eq!(json["sort"], "name");
        assert_eq!(json["adult"], false);
    }

    #[test]
    fn test_ping_payload_shape() {
        let payload = signature_ping_payload();
        assert_eq!(payload["reason"], "player.enter");
        assert_eq!(payload["package"], "tv.vavoo.app");
        assert_eq!(payload["metadata"]["device"]["model"], "Nexus 5");
        assert_eq!(payload["proxy"]["engine"], "ss");
    }

    #[test]
    fn test_catalog_page_tolerates_sparse_items() {
        let page: CatalogPage = serde_json::from_str(
            r#"{"items": [
                {"name": "Rai 1 .I", "url": "https://vavoo.to/play/1", "group": "Italy"},
                {"url": "https://vavoo.to/play/2"},
                {"name": "No Url"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.items[0].name, "Rai 1 .I");
        assert_eq!(page.items[1].name, "Unknown");
        assert_eq!(page.items[2].url, None);
    }

    #[test]
    fn test_catalog_page_defaults_to_empty() {
        let page: CatalogPage = serde_json::from_str("{}").unwrap();
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_resolved_link_parsing() {
        let links: Vec<ResolvedLink> =
            serde_json::from_str(r#"[{"url": "https://cdn.example.com/live.m3u8", "name": "x"}]"#)
                .unwrap();
        assert_eq!(
            links[0].url.as_deref(),
            Some("https://cdn.example.com/live.m3u8")
        );

        let empty: Vec<ResolvedLink> = serde_json::from_str("[]").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_ping_response_without_signature() {
        let ping: PingResponse = serde_json::from_str("{}").unwrap();
        assert!(ping.addon_sig.is_none());
    }
}
