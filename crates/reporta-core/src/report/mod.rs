//! Report domain: incident records, drafts, status filters.

pub mod filter;
pub mod model;

pub use filter::ReportFilter;
pub use model::{Report, ReportCategory, ReportDraft, ReportStatus};
