//! Enumerate profile pages and data records.
//!
//! Only the root directory and the one nested characters directory are
//! scanned. Entries come back in `read_dir` order, which depends on the
//! filesystem; no sorting is applied.

use crate::config::Config;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// List profile pages in the root directory, then in the characters directory.
///
/// Fails if the root directory does not exist.
pub fn list_profiles(config: &Config) -> Result<Vec<PathBuf>> {
    if !config.root.is_dir() {
        bail!("root directory not found: {}", config.root.display());
    }

    let mut files = scan_dir(&config.root, &config.profile_extension, config)?;

    let characters = config.characters_path();
    if characters.is_dir() {
        files.extend(scan_dir(&characters, &config.profile_extension, config)?);
    } else {
        tracing::debug!(dir = %characters.display(), "no characters directory");
    }
    Ok(files)
}

/// List data-record files in the characters directory.
pub fn list_data_records(config: &Config) -> Result<Vec<PathBuf>> {
    let characters = config.characters_path();
    if !characters.is_dir() {
        return Ok(Vec::new());
    }
    scan_dir(&characters, &config.data_extension, config)
}

/// Non-recursive scan for files with `ext`, skipping excluded names.
fn scan_dir(dir: &Path, ext: &str, config: &Config) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(ext) {
            continue;
        }
        let excluded = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| config.is_excluded(n));
        if excluded {
            tracing::debug!(file = %path.display(), "excluded");
            continue;
        }
        files.push(path);
    }
    Ok(files)
}
