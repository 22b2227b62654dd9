use std::fmt::Write as _;

use tracing::debug;

use crate::curation::Curation;

/// A candidate playlist row, typically one upstream catalog item.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistEntry {
    pub name: String,
    pub url: Option<String>,
}

/// Strips a trailing `.c` / `.s` country marker and Title-Cases each word:
/// `"RAI SPORT.c"` -> `"Rai Sport"`.
pub fn sanitize_tvg_id(name: &str) -> String {
    let base = strip_country_marker(name).trim().to_string();
    base.split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_country_marker(name: &str) -> &str {
    let lower = name.to_lowercase();
    if lower.ends_with(".c") || lower.ends_with(".s") {
        &name[..name.len() - 2]
    } else {
        name
    }
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + chars.as_str().to_lowercase().as_str()
        }
        None => String::new(),
    }
}

/// First category whose keyword list hits the name, `ALTRI` otherwise.
pub fn categorize(name: &str, curation: &Curation) -> String {
    let lower = name.to_lowercase();
    for (category, keywords) in &curation.categories.0 {
        if keywords.iter().any(|k| lower.contains(&k.to_lowercase())) {
            return category.clone();
        }
    }
    "ALTRI".to_string()
}

/// Configured logo, else a placeholder image labelled with the channel
/// name (marker stripped, last three characters dropped, spaces as `+`).
pub fn logo_url(name: &str, curation: &Curation) -> String {
    if let Some(url) = curation.logos.get(&name.to_lowercase()) {
        if !url.is_empty() {
            return url.clone();
        }
    }

    let mut clean = strip_country_marker(name).trim().to_string();
    if clean.chars().count() > 3 {
        let keep = clean.chars().count() - 3;
        clean = clean.chars().take(keep).collect();
    }
    format!("https://placehold.co/400x400?text={}", clean.replace(' ', "+"))
}

/// Renders the curated channel list as an M3U8 playlist with EPG and
/// per-channel player headers.
pub fn render(entries: &[PlaylistEntry], curation: &Curation, epg_url: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#EXTM3U url-tvg=\"{epg_url}\"");

    for entry in entries {
        let lower = entry.name.to_lowercase();

        if curation.remove.iter().any(|w| lower.contains(&w.to_lowercase())) {
            debug!("Skipping channel {} (in remove list)", entry.name);
            continue;
        }
        if !curation.filters.iter().any(|w| lower.contains(&w.to_lowercase())) {
            debug!("Excluded channel: {}", entry.name);
            continue;
        }
        let Some(url) = entry.url.as_deref() else {
            continue;
        };

        let tvg_id = sanitize_tvg_id(&entry.name);
        let category = categorize(&entry.name, curation);
        let logo = logo_url(&entry.name, curation);

        let _ = writeln!(
            out,
            "#EXTINF:-1 tvg-id=\"{tvg_id}\" tvg-name=\"{tvg_id}\" tvg-logo=\"{logo}\" group-title=\"{category}\",{tvg_id}"
        );
        let _ = writeln!(out, "#EXTVLCOPT:http-user-agent=okhttp/4.11.0");
        let _ = writeln!(out, "#EXTVLCOPT:http-origin=https://vavoo.to/");
        let _ = writeln!(out, "#EXTVLCOPT:http-referrer=https://vavoo.to/");
        let _ = writeln!(out, "{url}");
    }

    out
}
