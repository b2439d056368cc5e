//! Report list filters.

use super::model::ReportStatus;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Filter applied when listing reports.
///
/// `All` contributes no status constraint at all: the request body omits the
/// `status` field entirely rather than sending a wildcard value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReportFilter {
    All,
    Pending,
    Approved,
    Rejected,
}

impl ReportFilter {
    /// The status constraint this filter contributes to a list request.
    pub fn status(&self) -> Option<ReportStatus> {
        match self {
            ReportFilter::All => None,
            ReportFilter::Pending => Some(ReportStatus::Pending),
            ReportFilter::Approved => Some(ReportStatus::Approved),
            ReportFilter::Rejected => Some(ReportStatus::Rejected),
        }
    }
}

impl Default for ReportFilter {
    fn default() -> Self {
        ReportFilter::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_contributes_no_status() {
        assert_eq!(ReportFilter::All.status(), None);
    }

    #[test]
    fn test_status_filters_map_to_statuses() {
        assert_eq!(
            ReportFilter::Pending.status(),
            Some(ReportStatus::Pending)
        );
        assert_eq!(
            ReportFilter::Approved.status(),
            Some(ReportStatus::Approved)
        );
        assert_eq!(
            ReportFilter::Rejected.status(),
            Some(ReportStatus::Rejected)
        );
    }

    #[test]
    fn test_parses_from_cli_input() {
        assert_eq!("all".parse::<ReportFilter>().unwrap(), ReportFilter::All);
        assert_eq!(
            "Pending".parse::<ReportFilter>().unwrap(),
            ReportFilter::Pending
        );
    }
}
