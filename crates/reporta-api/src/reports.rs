//! Report endpoints.
//!
//! Every operation sends the bearer token. The original client omitted the
//! `Authorization` header on list/delete/approve/reject while sending it on
//! create/update; that asymmetry is treated as an oversight and all
//! operations authenticate uniformly here.

use reporta_core::error::{ReportaError, Result};
use reporta_core::report::{Report, ReportDraft, ReportFilter, ReportStatus};
use reporta_core::session::Session;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Body of a `get-reports` request.
///
/// Absent fields are omitted from the JSON entirely: an admin listing with
/// the "all" filter sends an empty object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReportStatus>,
}

impl ListQuery {
    /// Builds the query for a caller: non-admin sessions are scoped to their
    /// own reports by owner id, admins see everything.
    pub fn for_caller(session: &Session, filter: ReportFilter) -> Self {
        Self {
            user_id: if session.is_admin() {
                None
            } else {
                Some(session.id)
            },
            status: filter.status(),
        }
    }
}

/// Client for the `/api/report` endpoints.
#[derive(Clone)]
pub struct ReportsClient {
    client: Client,
    base_url: String,
}

impl ReportsClient {
    /// Creates a new client against the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }

    fn check(context: &'static str, status: StatusCode) -> Result<()> {
        if status.is_success() {
            Ok(())
        } else {
            Err(ReportaError::request(
                context,
                format!("status {}", status),
            ))
        }
    }

    /// Submits a new report. The server assigns the id and pending status.
    pub async fn create(&self, token: &str, draft: &ReportDraft) -> Result<()> {
        let url = format!("{}/api/report/create-report", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", Self::bearer(token))
            .json(draft)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| ReportaError::request("create-report", e.to_string()))?;

        Self::check("create-report", response.status())
    }

    /// Fetches reports matching the query, in server order.
    pub async fn list(&self, token: &str, query: &ListQuery) -> Result<Vec<Report>> {
        let url = format!("{}/api/report/get-reports", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", Self::bearer(token))
            .json(query)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| ReportaError::request("get-reports", e.to_string()))?;

        Self::check("get-reports", response.status())?;

        response
            .json::<Vec<Report>>()
            .await
            .map_err(|e| ReportaError::request("get-reports", e.to_string()))
    }

    /// Replaces the content of an existing report. Ownership is enforced
    /// server-side.
    pub async fn update(&self, token: &str, id: i64, draft: &ReportDraft) -> Result<()> {
        let url = format!("{}/api/report/update-report/{}", self.base_url, id);

        let response = self
            .client
            .patch(&url)
            .header("Authorization", Self::bearer(token))
            .json(draft)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| ReportaError::request("update-report", e.to_string()))?;

        Self::check("update-report", response.status())
    }

    /// Deletes a report. Irreversible; callers gate this behind interactive
    /// confirmation.
    pub async fn delete(&self, token: &str, id: i64) -> Result<()> {
        let url = format!("{}/api/report/delete-report/{}", self.base_url, id);

        let response = self
            .client
            .delete(&url)
            .header("Authorization", Self::bearer(token))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| ReportaError::request("delete-report", e.to_string()))?;

        Self::check("delete-report", response.status())
    }

    /// Marks a report approved. The server endpoint keeps its original
    /// spelling.
    pub async fn approve(&self, token: &str, id: i64) -> Result<()> {
        let url = format!("{}/api/report/aprove-report/{}", self.base_url, id);

        let response = self
            .client
            .patch(&url)
            .header("Authorization", Self::bearer(token))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| ReportaError::request("aprove-report", e.to_string()))?;

        Self::check("aprove-report", response.status())
    }

    /// Marks a report rejected.
    pub async fn reject(&self, token: &str, id: i64) -> Result<()> {
        let url = format!("{}/api/report/reject-report/{}", self.base_url, id);

        let response = self
            .client
            .patch(&url)
            .header("Authorization", Self::bearer(token))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| ReportaError::request("reject-report", e.to_string()))?;

        Self::check("reject-report", response.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reporta_core::session::Role;

    fn session(role_type: Role) -> Session {
        Session {
            id: 5,
            role_id: if role_type == Role::Admin { 1 } else { 2 },
            role_type,
            token: "t1".to_string(),
        }
    }

    #[test]
    fn test_non_admin_list_is_scoped_to_owner() {
        let query = ListQuery::for_caller(&session(Role::User), ReportFilter::Pending);
        assert_eq!(query.user_id, Some(5));

        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["user_id"], 5);
        assert_eq!(value["status"], "pending");
    }

    #[test]
    fn test_admin_list_is_unscoped() {
        let query = ListQuery::for_caller(&session(Role::Admin), ReportFilter::Rejected);
        assert_eq!(query.user_id, None);

        let value = serde_json::to_value(&query).unwrap();
        assert!(value.get("user_id").is_none());
        assert_eq!(value["status"], "rejected");
    }

    #[test]
    fn test_all_filter_omits_status_field() {
        let query = ListQuery::for_caller(&session(Role::Admin), ReportFilter::All);
        let value = serde_json::to_value(&query).unwrap();

        assert!(value.get("status").is_none());
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn test_approved_filter_uses_wire_spelling() {
        let query = ListQuery::for_caller(&session(Role::User), ReportFilter::Approved);
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["status"], "aproved");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_request_error() {
        let client = ReportsClient::new("http://127.0.0.1:9");
        let err = client.delete("t1", 4).await.unwrap_err();
        assert!(err.is_request());
    }
}
