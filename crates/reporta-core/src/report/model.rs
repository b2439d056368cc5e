//! Report domain model.
//!
//! The authoritative copy of every report lives in the remote API; the client
//! holds a read-only projection plus pending edits. Wire spellings follow the
//! server exactly (note the server's `"aproved"` and the Spanish category
//! values), while the Rust identifiers carry the English names.

use crate::error::{ReportaError, Result};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Lifecycle status of a report.
///
/// Transitions are one-directional (pending→approved, pending→rejected) and
/// are always applied server-side; the client never computes status locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReportStatus {
    #[serde(rename = "pending")]
    Pending,
    // The server spells this status "aproved"
    #[serde(rename = "aproved")]
    Approved,
    #[serde(rename = "rejected")]
    Rejected,
}

/// Closed category set for incident reports.
///
/// The server stores and returns the original Spanish labels; conversion
/// happens at the serde boundary, and anything unrecognized collapses to
/// `Other` instead of failing the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReportCategory {
    Security,
    Infrastructure,
    Services,
    Behavior,
    Other,
}

impl ReportCategory {
    /// The label this category travels as on the wire.
    pub fn wire_label(&self) -> &'static str {
        match self {
            ReportCategory::Security => "Seguridad",
            ReportCategory::Infrastructure => "Infraestructura",
            ReportCategory::Services => "Servicios",
            ReportCategory::Behavior => "Comportamiento",
            ReportCategory::Other => "Otro",
        }
    }
}

impl From<String> for ReportCategory {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Seguridad" => ReportCategory::Security,
            "Infraestructura" => ReportCategory::Infrastructure,
            "Servicios" => ReportCategory::Services,
            "Comportamiento" => ReportCategory::Behavior,
            _ => ReportCategory::Other,
        }
    }
}

impl From<ReportCategory> for String {
    fn from(category: ReportCategory) -> Self {
        category.wire_label().to_string()
    }
}

impl Default for ReportCategory {
    fn default() -> Self {
        ReportCategory::Other
    }
}

/// A user-submitted incident record as returned by the server.
///
/// Fields the server may omit on older rows fall back to defaults rather
/// than failing the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    /// Owner of the report
    pub user_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: ReportCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: Option<ReportStatus>,
}

impl Report {
    /// Whether the approve action is still offered for this report.
    ///
    /// This is a UI guard, not a correctness guarantee: the server remains
    /// the authority on status transitions.
    pub fn can_approve(&self) -> bool {
        self.status != Some(ReportStatus::Approved)
    }

    /// Whether the reject action is still offered for this report.
    pub fn can_reject(&self) -> bool {
        self.status != Some(ReportStatus::Rejected)
    }
}

/// Pending report content for creation or edit.
///
/// Validated at the client boundary before any network call is attempted.
#[derive(Debug, Clone, Serialize)]
pub struct ReportDraft {
    pub user_id: i64,
    pub title: String,
    pub category: ReportCategory,
    pub description: String,
    pub location: String,
}

impl ReportDraft {
    /// Checks that every required field is present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns `ReportaError::Validation` naming the first offending field.
    /// No network call may be issued when this fails.
    pub fn validate(&self) -> Result<()> {
        if self.user_id <= 0 {
            return Err(ReportaError::validation("user_id"));
        }
        if self.title.trim().is_empty() {
            return Err(ReportaError::validation("title"));
        }
        if self.description.trim().is_empty() {
            return Err(ReportaError::validation("description"));
        }
        if self.location.trim().is_empty() {
            return Err(ReportaError::validation("location"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ReportDraft {
        ReportDraft {
            user_id: 5,
            title: "Broken streetlight".to_string(),
            category: ReportCategory::Infrastructure,
            description: "The light on the corner has been out for a week".to_string(),
            location: "5th and Main".to_string(),
        }
    }

    #[test]
    fn test_status_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&ReportStatus::Approved).unwrap(),
            "\"aproved\""
        );
        let status: ReportStatus = serde_json::from_str("\"aproved\"").unwrap();
        assert_eq!(status, ReportStatus::Approved);
    }

    #[test]
    fn test_category_wire_values_are_spanish() {
        assert_eq!(
            serde_json::to_string(&ReportCategory::Security).unwrap(),
            "\"Seguridad\""
        );
        let cat: ReportCategory = serde_json::from_str("\"Comportamiento\"").unwrap();
        assert_eq!(cat, ReportCategory::Behavior);
    }

    #[test]
    fn test_unknown_category_falls_back_to_other() {
        let cat: ReportCategory = serde_json::from_str("\"Desconocida\"").unwrap();
        assert_eq!(cat, ReportCategory::Other);
    }

    #[test]
    fn test_report_tolerates_missing_optional_fields() {
        let report: Report = serde_json::from_str(r#"{"id": 9, "user_id": 5}"#).unwrap();
        assert_eq!(report.title, "");
        assert_eq!(report.status, None);
        assert_eq!(report.category, ReportCategory::Other);
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_empty_fields_fail_validation() {
        let mut d = draft();
        d.title = "   ".to_string();
        let err = d.validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("title"));

        let mut d = draft();
        d.description = String::new();
        assert!(d.validate().unwrap_err().is_validation());

        let mut d = draft();
        d.location = String::new();
        assert!(d.validate().unwrap_err().is_validation());

        let mut d = draft();
        d.user_id = 0;
        assert!(d.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_approve_reject_availability() {
        let mut report: Report = serde_json::from_str(
            r#"{"id": 1, "user_id": 5, "title": "t", "status": "pending"}"#,
        )
        .unwrap();
        assert!(report.can_approve());
        assert!(report.can_reject());

        report.status = Some(ReportStatus::Approved);
        assert!(!report.can_approve());
        assert!(report.can_reject());

        report.status = Some(ReportStatus::Rejected);
        assert!(report.can_approve());
        assert!(!report.can_reject());
    }
}
