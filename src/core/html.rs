// src/core/html.rs
//
// Metadata lookups over untrusted page HTML. Missing pieces yield None, never a panic.
use scraper::{Html, Selector};

/// `content` of the first `<meta property="...">` carrying one.
pub fn meta_content(html: &str, property: &str) -> Option<String> {
    let selector = Selector::parse(&format!(r#"meta[property="{property}"]"#)).ok()?;
    let doc = Html::parse_document(html);
    doc.select(&selector)
        .find_map(|el| el.value().attr("content"))
        .map(|c| c.trim().to_string())
}

/// Last `/`-separated piece, query and fragment dropped; `fb://profile/42?ref=x` → `42`.
pub fn trailing_segment(content: &str) -> &str {
    let content = content.split(['?', '#']).next().unwrap_or(content);
    content.rsplit('/').next().unwrap_or(content)
}

pub fn is_numeric_id(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html><html><head>
        <meta property="og:title" content="Alice">
        <meta property="al:ios:url" content="fb://profile/1000023" />
        </head><body></body></html>"#;

    #[test]
    fn finds_meta_by_property() {
        assert_eq!(meta_content(PAGE, "al:ios:url").as_deref(), Some("fb://profile/1000023"));
        assert_eq!(meta_content(PAGE, "og:title").as_deref(), Some("Alice"));
    }

    #[test]
    fn missing_meta_is_none() {
        assert_eq!(meta_content(PAGE, "al:android:url"), None);
        assert_eq!(meta_content("not html at all <<<", "al:ios:url"), None);
        assert_eq!(meta_content(r#"<meta property="al:ios:url">"#, "al:ios:url"), None);
    }

    #[test]
    fn trailing_segment_splits_on_slash() {
        assert_eq!(trailing_segment("fb://profile/1000023"), "1000023");
        assert_eq!(trailing_segment("1000023"), "1000023");
        assert_eq!(trailing_segment("fb://profile/"), "");
        assert_eq!(trailing_segment("fb://profile/123?ref=x"), "123");
        assert_eq!(trailing_segment("fb://profile/123#top"), "123");
    }

    #[test]
    fn numeric_id_rules() {
        assert!(is_numeric_id("1000023"));
        assert!(!is_numeric_id(""));
        assert!(!is_numeric_id("12a"));
        assert!(!is_numeric_id("-12"));
    }
}
