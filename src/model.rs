//! Data model shared by the extraction pipeline.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A profile page loaded from disk.
#[derive(Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    /// File stem, the key shared by profile pages and data records.
    pub identifier: String,
    pub content: String,
}

impl SourceFile {
    /// Read a profile page. Fails on missing files, permissions and non-UTF-8 content.
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            identifier: identifier_of(path),
            content,
        })
    }
}

/// Derive the identifier from a path: "characters/gojo.json" → "gojo".
pub fn identifier_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Raw fact-check text for one identifier.
#[derive(Debug, Clone)]
pub struct ExtractedRecord {
    pub identifier: String,
    pub raw_block: String,
    pub is_placeholder: bool,
}

/// Where a report section came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Structured comment found in the profile page.
    Extracted,
    /// Synthesized from loose markup fields.
    Placeholder,
    /// Known only from the data-record set.
    Reconciled,
}

/// A normalized report section.
#[derive(Debug, Clone)]
pub struct FormattedSection {
    pub identifier: String,
    pub display_name: String,
    pub category: String,
    pub description: Option<String>,
    pub origin: Origin,
}

/// Counters reported at the end of the run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub profile_files: usize,
    pub data_files: usize,
    pub extracted: usize,
    /// Includes reconciled entries.
    pub placeholders: usize,
    pub reconciled: usize,
    pub missing: usize,
}

impl Summary {
    /// Total unique identifiers accounted for.
    pub fn processed(&self) -> usize {
        self.extracted + self.placeholders + self.missing
    }
}

/// The complete report, built once and serialized once.
#[derive(Debug, Default)]
pub struct ReportDocument {
    pub sections: Vec<FormattedSection>,
    pub summary: Summary,
}
