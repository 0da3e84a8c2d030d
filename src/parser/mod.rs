//! Record extraction — structured comment first, placeholder otherwise.

pub mod comment;
pub mod fallback;

use crate::model::{ExtractedRecord, SourceFile};

/// Produce the record for a loaded page. Never fails.
pub fn extract_record(source: &SourceFile) -> ExtractedRecord {
    comment::extract(source).unwrap_or_else(|| {
        tracing::debug!(
            id = %source.identifier,
            file = %source.path.display(),
            "no fact check comment, synthesizing placeholder"
        );
        fallback::synthesize(source)
    })
}
