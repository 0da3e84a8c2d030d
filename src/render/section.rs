//! Record → report section.
//!
//! Labeled fields are pulled out of the raw block with best-effort text
//! search. Formatting is pure: identical records give identical sections.

use crate::model::{ExtractedRecord, FormattedSection, Origin};
use crate::parser::fallback::UNKNOWN;
use regex::Regex;
use std::sync::LazyLock;

pub const NO_DESCRIPTION: &str = "No detailed description available.";

static RE_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bName:[ \t]*([^\n]*)").unwrap());

static RE_SERIES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bSeries:[ \t]*([^\n]*)").unwrap());

static RE_DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:DESCRIPTION|Description):").unwrap());

/// Any known label; ends a single-line field value.
static RE_ANY_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:Name|Series|DESCRIPTION|Description|Last Updated):").unwrap()
});

static RE_LAST_UPDATED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bLast Updated:").unwrap());

/// A line opening a new all-caps section, e.g. `FUN FACTS:`.
static RE_CAPS_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9 ()/_-]+:").unwrap());

/// An all-caps label after other text on the same line, e.g. `... ANALYSIS:`.
static RE_INLINE_CAPS_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s[A-Z][A-Z]+[A-Z0-9 ()/_-]*:").unwrap());

/// Remove the first `<!--` and the first `-->`, nothing more.
pub fn strip_delimiters(raw: &str) -> String {
    raw.replacen("<!--", "", 1)
        .replacen("-->", "", 1)
        .trim()
        .to_string()
}

/// Value of a single-line label, cut at the next label on the same line.
fn line_field(re: &Regex, text: &str) -> Option<String> {
    let caps = re.captures(text)?;
    let rest = &caps[1];
    let value = match RE_ANY_LABEL.find(rest) {
        Some(m) => &rest[..m.start()],
        None => rest,
    };
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Multi-line description: stops at a blank line, an all-caps label or
/// `Last Updated:`.
fn description_field(text: &str) -> Option<String> {
    let label = RE_DESCRIPTION.find(text)?;
    let rest = &text[label.end()..];
    let mut lines = rest.lines();
    let mut parts: Vec<&str> = Vec::new();

    let first = lines.next().unwrap_or_default();
    let stop = [&*RE_LAST_UPDATED, &*RE_INLINE_CAPS_LABEL]
        .iter()
        .filter_map(|re| re.find(first))
        .map(|m| m.start())
        .min();
    let head = first[..stop.unwrap_or(first.len())].trim();
    if !head.is_empty() {
        parts.push(head);
    }
    if stop.is_some() {
        return join_parts(&parts);
    }

    for line in lines {
        let line = line.trim();
        if line.is_empty() || RE_CAPS_LABEL.is_match(line) {
            break;
        }
        if let Some(m) = RE_LAST_UPDATED.find(line) {
            let head = line[..m.start()].trim();
            if !head.is_empty() {
                parts.push(head);
            }
            break;
        }
        parts.push(line);
    }
    join_parts(&parts)
}

fn join_parts(parts: &[&str]) -> Option<String> {
    (!parts.is_empty()).then(|| parts.join("\n"))
}

/// Normalize a record into a section, applying the sentinel defaults.
pub fn format_record(record: &ExtractedRecord) -> FormattedSection {
    let text = strip_delimiters(&record.raw_block);
    FormattedSection {
        identifier: record.identifier.clone(),
        display_name: line_field(&RE_NAME, &text).unwrap_or_else(|| record.identifier.clone()),
        category: line_field(&RE_SERIES, &text).unwrap_or_else(|| UNKNOWN.to_string()),
        description: description_field(&text),
        origin: if record.is_placeholder {
            Origin::Placeholder
        } else {
            Origin::Extracted
        },
    }
}

/// Render one section: heading, name/category line, description, separator.
pub fn render_section(section: &FormattedSection) -> String {
    format!(
        "## {}\n\n**{}** — {}\n\n{}\n\n---\n\n",
        section.identifier,
        section.display_name,
        section.category,
        section.description.as_deref().unwrap_or(NO_DESCRIPTION),
    )
}
