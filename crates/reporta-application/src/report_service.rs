//! Report management use case.
//!
//! Wraps the report API with validation, owner scoping, and the refresh
//! pattern: after every successful mutation the list is re-fetched with the
//! current filter. There are no optimistic local updates; the only local
//! state is the last fetched list held for display.

use crate::session_service::SessionService;
use reporta_api::geo::LocationResolver;
use reporta_api::reports::{ListQuery, ReportsClient};
use reporta_core::error::{ReportaError, Result};
use reporta_core::report::{Report, ReportCategory, ReportDraft, ReportFilter};
use reporta_core::session::Session;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Content of a create/edit submission before validation.
#[derive(Debug, Clone)]
pub struct ReportInput {
    pub title: String,
    pub category: ReportCategory,
    pub description: String,
    /// Explicit location; when absent the geolocation chain fills it in
    pub location: Option<String>,
}

impl ReportInput {
    /// Fails fast on fields the location lookup cannot fix, so a rejected
    /// submission issues no network call at all.
    fn validate_content(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ReportaError::validation("title"));
        }
        if self.description.trim().is_empty() {
            return Err(ReportaError::validation("description"));
        }
        Ok(())
    }
}

pub struct ReportService {
    client: ReportsClient,
    resolver: LocationResolver,
    session: Arc<SessionService>,
    /// Last fetched list, held for display only
    reports: RwLock<Vec<Report>>,
    /// Filter the list was last fetched with
    filter: RwLock<ReportFilter>,
}

impl ReportService {
    pub fn new(
        client: ReportsClient,
        resolver: LocationResolver,
        session: Arc<SessionService>,
    ) -> Self {
        Self {
            client,
            resolver,
            session,
            reports: RwLock::new(Vec::new()),
            filter: RwLock::new(ReportFilter::default()),
        }
    }

    async fn require_session(&self, context: &'static str) -> Result<Session> {
        self.session
            .session()
            .await
            .ok_or_else(|| ReportaError::security(format!("{} requires a session", context)))
    }

    /// Re-fetches the list with the current filter and caches it for display.
    pub async fn refresh(&self) -> Result<Vec<Report>> {
        let filter = *self.filter.read().await;
        self.list(filter).await
    }

    /// Fetches reports for the given filter, scoped to the caller's own
    /// reports unless the caller is an admin. Server order is preserved.
    pub async fn list(&self, filter: ReportFilter) -> Result<Vec<Report>> {
        let session = self.require_session("get-reports").await?;
        let query = ListQuery::for_caller(&session, filter);

        let fetched = self.client.list(&session.token, &query).await?;

        *self.filter.write().await = filter;
        *self.reports.write().await = fetched.clone();
        Ok(fetched)
    }

    /// Submits a new report.
    ///
    /// When no explicit location is given, the geolocation chain supplies
    /// one (degrading to a placeholder, never blocking submission). The
    /// draft is validated before any network call; the server assigns the
    /// id and pending status.
    pub async fn create(&self, input: ReportInput) -> Result<Vec<Report>> {
        let session = self.require_session("create-report").await?;
        input.validate_content()?;

        let draft = self.build_draft(&session, input).await;
        draft.validate()?;
        self.client.create(&session.token, &draft).await?;

        tracing::info!("Report created");
        self.refresh().await
    }

    /// Edits an existing report. Only the owning user may logically call
    /// this; enforcement is server-side.
    pub async fn update(&self, id: i64, input: ReportInput) -> Result<Vec<Report>> {
        let session = self.require_session("update-report").await?;
        input.validate_content()?;

        let draft = self.build_draft(&session, input).await;
        draft.validate()?;
        self.client.update(&session.token, id, &draft).await?;

        tracing::info!("Report {} updated", id);
        self.refresh().await
    }

    /// Deletes a report. Irreversible: interactive confirmation is the
    /// caller's responsibility, not enforced here.
    pub async fn delete(&self, id: i64) -> Result<Vec<Report>> {
        let session = self.require_session("delete-report").await?;
        self.client.delete(&session.token, id).await?;

        tracing::info!("Report {} deleted", id);
        self.refresh().await
    }

    /// Approves a report. The server is the authority on the transition.
    pub async fn approve(&self, id: i64) -> Result<Vec<Report>> {
        let session = self.require_session("aprove-report").await?;
        self.client.approve(&session.token, id).await?;

        tracing::info!("Report {} approved", id);
        self.refresh().await
    }

    /// Rejects a report.
    pub async fn reject(&self, id: i64) -> Result<Vec<Report>> {
        let session = self.require_session("reject-report").await?;
        self.client.reject(&session.token, id).await?;

        tracing::info!("Report {} rejected", id);
        self.refresh().await
    }

    /// Whether the approve action is offered for a report in the last
    /// fetched list. A UI guard only; unknown ids report true and the
    /// server decides.
    pub async fn can_approve(&self, id: i64) -> bool {
        self.reports
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .is_none_or(|r| r.can_approve())
    }

    /// Whether the reject action is offered for a report in the last
    /// fetched list.
    pub async fn can_reject(&self, id: i64) -> bool {
        self.reports
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .is_none_or(|r| r.can_reject())
    }

    async fn build_draft(&self, session: &Session, input: ReportInput) -> ReportDraft {
        let location = match input.location {
            Some(location) if !location.trim().is_empty() => location,
            // The lookup is awaited inline, so its result can never land on
            // a flow that has already been dismissed
            _ => self.resolver.resolve().await,
        };

        ReportDraft {
            user_id: session.id,
            title: input.title,
            category: input.category,
            description: input.description,
            location,
        }
    }
}
