pub mod curation;
pub mod render;

pub use curation::*;
pub use render::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_tvg_id() {
        assert_eq!(sanitize_tvg_id("RAI SPORT.c"), "Rai Sport");
        assert_eq!(sanitize_tvg_id("sky uno .C"), "Sky Uno");
        assert_eq!(sanitize_tvg_id("Canale 5"), "Canale 5");
        assert_eq!(sanitize_tvg_id("dmax.s"), "Dmax");
    }

    #[test]
    fn test_categorize_first_match_wins() {
        let curation = Curation::default();
        assert_eq!(categorize("Rai 1 .c", &curation), "RAI");
        assert_eq!(categorize("Canale 5", &curation), "MEDIASET");
        // matches both DISCOVERY ("discovery") and BAMBINI ("k2");
        // DISCOVERY is declared first
        assert_eq!(categorize("Discovery K2", &curation), "DISCOVERY");
        assert_eq!(categorize("Something Obscure", &curation), "ALTRI");
    }

    #[test]
    fn test_category_rules_keep_document_order() {
        let json = r#"{"ZULU": ["zz"], "ALPHA": ["aa"]}"#;
        let rules: CategoryRules = serde_json::from_str(json).unwrap();
        assert_eq!(rules.0[0].0, "ZULU");
        assert_eq!(rules.0[1].0, "ALPHA");

        let round = serde_json::to_string(&rules).unwrap();
        assert_eq!(round, r#"{"ZULU":["zz"],"ALPHA":["aa"]}"#);
    }

    #[test]
    fn test_logo_url_prefers_configured_logo() {
        let curation = Curation::default();
        let url = logo_url("Sky Uno .c", &curation);
        assert!(url.ends_with("sky-uno-it.png"));
    }

    #[test]
    fn test_logo_url_placeholder() {
        let curation = Curation::default();
        // "Top Crime .c" -> marker stripped -> "Top Crime" -> last 3 dropped
        // -> "Top Cr" -> spaces become '+'
        assert_eq!(
            logo_url("Top Crime .c", &curation),
            "https://placehold.co/400x400?text=Top+Cr"
        );
    }
}
