//! The single extraction pass: enumerate, extract, reconcile, summarize.

use crate::config::Config;
use crate::discover;
use crate::model::{identifier_of, Origin, ReportDocument, SourceFile, Summary};
use crate::parser;
use crate::reconcile;
use crate::render::section::format_record;
use anyhow::Result;
use std::collections::HashSet;
use std::path::PathBuf;

/// Files found by enumeration, before any page is read.
#[derive(Debug)]
pub struct Inputs {
    pub profiles: Vec<PathBuf>,
    pub data_records: Vec<PathBuf>,
}

impl Inputs {
    /// Enumerate profiles and data records. Fails only if the root is missing.
    pub fn discover(config: &Config) -> Result<Self> {
        let profiles = discover::list_profiles(config)?;
        let data_records = discover::list_data_records(config)?;
        tracing::info!(
            profiles = profiles.len(),
            data_records = data_records.len(),
            "found character files"
        );
        Ok(Self {
            profiles,
            data_records,
        })
    }
}

/// Build the report from enumerated inputs.
///
/// Per-file read errors are logged and counted as missing.
pub fn build_report(inputs: &Inputs) -> ReportDocument {
    let Inputs {
        profiles,
        data_records,
    } = inputs;

    let mut doc = ReportDocument {
        summary: Summary {
            profile_files: profiles.len(),
            data_files: data_records.len(),
            ..Summary::default()
        },
        ..ReportDocument::default()
    };
    let mut seen: HashSet<String> = HashSet::new();
    let mut missing: Vec<String> = Vec::new();

    for path in profiles {
        let id = identifier_of(path);
        if seen.contains(&id) {
            tracing::debug!(id = %id, file = %path.display(), "duplicate identifier, skipped");
            continue;
        }

        let source = match SourceFile::load(path) {
            Ok(source) => source,
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "failed to read profile");
                if !missing.contains(&id) {
                    missing.push(id);
                }
                continue;
            }
        };

        let section = format_record(&parser::extract_record(&source));
        match section.origin {
            Origin::Extracted => doc.summary.extracted += 1,
            _ => doc.summary.placeholders += 1,
        }
        missing.retain(|m| m != &id);
        seen.insert(id);
        doc.sections.push(section);
    }

    let reconciled = reconcile::reconcile(data_records, &mut seen);
    missing.retain(|m| !reconciled.iter().any(|s| &s.identifier == m));
    doc.summary.reconciled = reconciled.len();
    doc.summary.placeholders += reconciled.len();
    doc.summary.missing = missing.len();
    doc.sections.extend(reconciled);

    for id in &missing {
        tracing::info!(id = %id, "no fact check information recovered");
    }
    doc
}
