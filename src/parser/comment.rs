//! Structured comment recognition.
//!
//! Patterns are tried from most to least specific and the first one that
//! matches anywhere in the page wins. Only the first occurrence of that
//! pattern is used.

use crate::model::{ExtractedRecord, SourceFile};
use regex::Regex;
use std::sync::LazyLock;

/// Marker phrase opening a fact-check block.
pub const MARKER: &str = "CHARACTER FACT CHECK INFORMATION";

/// `<!--` directly followed by the marker.
static RE_STRICT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--\s*CHARACTER FACT CHECK INFORMATION[\s\S]*?-->").unwrap());

/// Marker somewhere inside a single comment. `--` cannot appear before the
/// marker, so the match never starts in an earlier comment.
static RE_EMBEDDED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--(?:[^-]|-[^-])*?CHARACTER FACT CHECK INFORMATION[\s\S]*?-->").unwrap()
});

/// Any comment region mentioning "fact check" in any case. May span
/// several comments.
static RE_LOOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!--[\s\S]*?fact[\s_-]*check[\s\S]*?-->").unwrap());

static PATTERNS: LazyLock<[&'static Regex; 3]> =
    LazyLock::new(|| [&*RE_STRICT, &*RE_EMBEDDED, &*RE_LOOSE]);

/// Return the first fact-check comment in `content`, delimiters included.
pub fn find_comment(content: &str) -> Option<&str> {
    PATTERNS
        .iter()
        .find_map(|re| re.find(content))
        .map(|m| m.as_str())
}

/// Extract the structured comment from a profile page.
pub fn extract(source: &SourceFile) -> Option<ExtractedRecord> {
    find_comment(&source.content).map(|block| ExtractedRecord {
        identifier: source.identifier.clone(),
        raw_block: block.to_string(),
        is_placeholder: false,
    })
}
