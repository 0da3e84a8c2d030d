//! Text rendering for report sections and the assembled report.

pub mod report;
pub mod section;
