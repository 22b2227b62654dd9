use iptv_playlist::{render, Curation, PlaylistEntry};

fn entry(name: &str, url: &str) -> PlaylistEntry {
    PlaylistEntry {
        name: name.to_string(),
        url: Some(url.to_string()),
    }
}

#[test]
fn render_produces_header_and_channel_blocks() {
    let curation = Curation::default();
    let entries = vec![entry("Rai 1 .c", "https://vavoo.to/play/1")];

    let playlist = render(&entries, &curation, "http://epg-guide.com/it.gz");
    let lines: Vec<&str> = playlist.lines().collect();

    assert_eq!(lines[0], "#EXTM3U url-tvg=\"http://epg-guide.com/it.gz\"");
    assert_eq!(
        lines[1],
        "#EXTINF:-1 tvg-id=\"Rai 1\" tvg-name=\"Rai 1\" tvg-logo=\"https://raw.githubusercontent.com/tv-logo/tv-logos/main/countries/italy/rai-1-it.png\" group-title=\"RAI\",Rai 1"
    );
    assert_eq!(lines[2], "#EXTVLCOPT:http-user-agent=okhttp/4.11.0");
    assert_eq!(lines[3], "#EXTVLCOPT:http-origin=https://vavoo.to/");
    assert_eq!(lines[4], "#EXTVLCOPT:http-referrer=https://vavoo.to/");
    assert_eq!(lines[5], "https://vavoo.to/play/1");
    assert_eq!(lines.len(), 6);
}

#[test]
fn render_applies_remove_and_keep_lists() {
    let curation = Curation::default();
    let entries = vec![
        // in the remove list
        entry("QVC Italia", "https://vavoo.to/play/qvc"),
        // not in the keep list
        entry("Totally Unknown Channel", "https://vavoo.to/play/unknown"),
        // kept
        entry("Sky Cinema Uno .c", "https://vavoo.to/play/sky"),
    ];

    let playlist = render(&entries, &curation, "http://epg-guide.com/it.gz");
    assert!(!playlist.contains("qvc"));
    assert!(!playlist.contains("unknown"));
    assert!(playlist.contains("https://vavoo.to/play/sky"));
}

#[test]
fn render_skips_entries_without_url() {
    let curation = Curation::default();
    let entries = vec![PlaylistEntry {
        name: "Rai 1 .c".to_string(),
        url: None,
    }];

    let playlist = render(&entries, &curation, "http://epg-guide.com/it.gz");
    assert_eq!(playlist.lines().count(), 1); // header only
}

#[test]
fn curation_files_are_written_once_and_respected() {
    let dir = tempfile::tempdir().unwrap();

    let first = Curation::load_or_init(dir.path()).unwrap();
    assert_eq!(first, Curation::default());
    for file in [
        "channel_filters.json",
        "channel_remove.json",
        "category_keywords.json",
        "channel_logos.json",
    ] {
        assert!(dir.path().join(file).exists(), "{file} should be written");
    }

    // edit one file, reload: the edit survives
    std::fs::write(dir.path().join("channel_filters.json"), r#"["only this"]"#).unwrap();
    let second = Curation::load_or_init(dir.path()).unwrap();
    assert_eq!(second.filters, vec!["only this".to_string()]);
    assert_eq!(second.remove, first.remove);
}
