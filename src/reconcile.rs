//! Cross-reference data records against the processed profiles.

use crate::model::{identifier_of, FormattedSection, Origin};
use std::collections::HashSet;
use std::path::PathBuf;

pub const UNKNOWN_SERIES: &str = "Unknown Series";

pub const DATA_ONLY_NOTE: &str = "This character exists in data form only; \
no fact check information was found in a profile page.";

/// One section per data-record identifier not yet in `seen`.
///
/// Identifiers are added to `seen` as they are emitted, so a record
/// listed twice still yields a single section.
pub fn reconcile(data_records: &[PathBuf], seen: &mut HashSet<String>) -> Vec<FormattedSection> {
    let mut sections = Vec::new();
    for path in data_records {
        let id = identifier_of(path);
        if !seen.insert(id.clone()) {
            continue;
        }
        tracing::debug!(id = %id, "data record without fact check entry");
        sections.push(FormattedSection {
            display_name: id.clone(),
            identifier: id,
            category: UNKNOWN_SERIES.to_string(),
            description: Some(DATA_ONLY_NOTE.to_string()),
            origin: Origin::Reconciled,
        });
    }
    sections
}
