//! Report assembly: header, sections in processing order, summary.

use crate::model::{ReportDocument, Summary};
use crate::render::section::render_section;

pub const TITLE: &str = "# Character Fact Check Information";

/// Local time in the header's format.
pub fn generated_at() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Serialize the whole report. The timestamp line is the only input that
/// is not derived from `doc`.
pub fn render_report(doc: &ReportDocument, generated_at: &str) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&format!("# Generated on {}\n\n", generated_at));

    for section in &doc.sections {
        out.push_str(&render_section(section));
    }

    out.push_str(&render_summary(&doc.summary));
    out
}

fn render_summary(summary: &Summary) -> String {
    let mut out = String::from("# Summary\n");
    out.push_str(&format!("- Total character files: {}\n", summary.profile_files));
    out.push_str(&format!("- Total character data files: {}\n", summary.data_files));
    out.push_str(&format!(
        "- Total unique characters processed: {}\n",
        summary.processed()
    ));
    out.push_str(&format!(
        "- Characters with fact check comments: {}\n",
        summary.extracted
    ));
    out.push_str(&format!(
        "- Characters with placeholder entries: {}\n",
        summary.placeholders
    ));
    out.push_str(&format!(
        "- Characters missing fact check information: {}\n",
        summary.missing
    ));
    out
}
