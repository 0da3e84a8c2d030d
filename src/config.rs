//! Run configuration, resolved once at startup and passed into the pipeline.

use std::path::{Path, PathBuf};

/// Report file written into the root directory unless overridden.
pub const DEFAULT_OUTPUT_FILE: &str = "character-fact-checks.txt";

/// Nested directory holding data records and additional profile pages.
pub const DEFAULT_CHARACTERS_DIR: &str = "characters";

/// Pages in the root directory that are not character profiles.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    "index.html",
    "character-list.html",
    "admin.html",
    "reviews.html",
    "abouts.html",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub output: PathBuf,
    /// Exact file names skipped in both the root and the characters directory.
    pub exclusions: Vec<String>,
    pub characters_dir: String,
    pub profile_extension: String,
    pub data_extension: String,
}

impl Config {
    /// Defaults rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            output: root.join(DEFAULT_OUTPUT_FILE),
            root,
            exclusions: DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
            characters_dir: DEFAULT_CHARACTERS_DIR.to_string(),
            profile_extension: "html".to_string(),
            data_extension: "json".to_string(),
        }
    }

    /// Set the output path. Relative paths resolve against the root.
    pub fn with_output(mut self, output: &Path) -> Self {
        self.output = if output.is_absolute() {
            output.to_path_buf()
        } else {
            self.root.join(output)
        };
        self
    }

    pub fn with_exclusions(mut self, exclusions: Vec<String>) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn with_characters_dir(mut self, name: impl Into<String>) -> Self {
        self.characters_dir = name.into();
        self
    }

    pub fn characters_path(&self) -> PathBuf {
        self.root.join(&self.characters_dir)
    }

    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.exclusions.iter().any(|e| e == file_name)
    }
}
