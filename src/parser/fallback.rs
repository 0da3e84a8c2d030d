//! Placeholder records for pages without a structured comment.
//!
//! Pulls a title and a series out of the page markup with shallow pattern
//! matching and wraps them in a synthetic fact-check block, so the record
//! formatter treats both kinds of record the same way.

use crate::model::{ExtractedRecord, SourceFile};
use crate::parser::comment::MARKER;
use regex::Regex;
use std::sync::LazyLock;

/// Note carried by every synthesized record.
pub const PLACEHOLDER_NOTE: &str = "No detailed fact check information found for this character. \
This is an auto-generated placeholder.";

pub const UNKNOWN: &str = "Unknown";

static RE_H1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1\b[^>]*>(.*?)</h1\s*>").unwrap());

static RE_NAME_CLASS: LazyLock<Regex> = LazyLock::new(|| class_element("character-name"));

static RE_SERIES_CLASS: LazyLock<Regex> = LazyLock::new(|| class_element("character-series"));

static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

static RE_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// First element whose `class` attribute lists `class` as a whole token;
/// captures up to the next closing tag.
fn class_element(class: &str) -> Regex {
    let pattern = format!(
        r#"(?is)<[a-z][a-z0-9]*\s(?:[^>]*\s)?class\s*=\s*["'](?:[^"']*\s)?{}(?:\s[^"']*)?["'][^>]*>(.*?)</"#,
        regex::escape(class)
    );
    Regex::new(&pattern).unwrap()
}

/// Page title: the first `<h1>`, else the first `.character-name` element.
pub fn find_title(html: &str) -> Option<String> {
    [&*RE_H1, &*RE_NAME_CLASS]
        .iter()
        .filter_map(|re| re.captures(html))
        .map(|caps| clean_text(&caps[1]))
        .find(|text| !text.is_empty())
}

/// Page category: the first `.character-series` element.
pub fn find_series(html: &str) -> Option<String> {
    RE_SERIES_CLASS
        .captures(html)
        .map(|caps| clean_text(&caps[1]))
        .filter(|text| !text.is_empty())
}

/// Drop inner tags, decode the common entities and collapse whitespace.
fn clean_text(fragment: &str) -> String {
    let text = RE_TAG.replace_all(fragment, " ");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    RE_WS.replace_all(&text, " ").trim().to_string()
}

/// Build a placeholder record from whatever the page markup offers.
///
/// A missing title leaves the `Name:` label out so the section falls back
/// to the identifier; a missing series becomes `Unknown`.
pub fn synthesize(source: &SourceFile) -> ExtractedRecord {
    let title = find_title(&source.content);
    let series = find_series(&source.content).unwrap_or_else(|| UNKNOWN.to_string());

    let mut block = format!("{MARKER}\n");
    if let Some(title) = title {
        block.push_str(&format!("Name: {title}\n"));
    }
    block.push_str(&format!("Series: {series}\n\nDESCRIPTION:\n{PLACEHOLDER_NOTE}\n"));

    ExtractedRecord {
        identifier: source.identifier.clone(),
        raw_block: block,
        is_placeholder: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(content: &str) -> SourceFile {
        SourceFile {
            path: "villain.html".into(),
            identifier: "villain".into(),
            content: content.into(),
        }
    }

    #[test]
    fn title_from_h1() {
        let html = "<h1 id=\"t\">Dark <em>Lord</em></h1><h1>Other</h1>";
        assert_eq!(find_title(html).as_deref(), Some("Dark Lord"));
    }

    #[test]
    fn title_from_name_class() {
        let html = "<div class=\"card character-name big\">Maomao</div>";
        assert_eq!(find_title(html).as_deref(), Some("Maomao"));
    }

    #[test]
    fn series_from_class() {
        let html = "<p class='character-series'>\n  Shadow &amp; Realm\n</p>";
        assert_eq!(find_series(html).as_deref(), Some("Shadow & Realm"));
    }

    #[test]
    fn class_must_match_whole_token() {
        let html = "<div class=\"character-series-box\"><span>Badge</span>\
                    <p class=\"character-series\">Shadow Realm</p></div>";
        assert_eq!(find_series(html).as_deref(), Some("Shadow Realm"));

        let html = "<div class=\"character-name-wrapper\"><b>Card</b></div>\
                    <span class=\"big character-name\">Maomao</span>";
        assert_eq!(find_title(html).as_deref(), Some("Maomao"));
    }

    #[test]
    fn data_class_attribute_ignored() {
        let html = "<p data-class=\"character-series\">Wrong</p>\
                    <p id=\"s\" class=\"character-series\">Right</p>";
        assert_eq!(find_series(html).as_deref(), Some("Right"));
    }

    #[test]
    fn empty_elements_are_not_found() {
        assert_eq!(find_title("<h1>  </h1>"), None);
        assert_eq!(find_series("<p class=\"character-series\"></p>"), None);
    }

    #[test]
    fn placeholder_block_carries_fields_and_note() {
        let html = "<h1>Dark Lord</h1><p class=\"character-series\">Shadow Realm</p>";
        let record = synthesize(&source(html));
        assert!(record.is_placeholder);
        assert_eq!(record.identifier, "villain");
        assert!(record.raw_block.contains("Name: Dark Lord\n"));
        assert!(record.raw_block.contains("Series: Shadow Realm\n"));
        assert!(record.raw_block.contains(PLACEHOLDER_NOTE));
    }

    #[test]
    fn placeholder_without_fields() {
        let record = synthesize(&source("<p>nothing here</p>"));
        assert!(!record.raw_block.contains("Name:"));
        assert!(record.raw_block.contains("Series: Unknown\n"));
    }
}
