//! Session store use case.
//!
//! Single source of truth for "who is logged in", with durable persistence
//! across process restarts. All mutations of the auth state flow through
//! `login`/`logout`/`restore` here; nothing else touches it.

use reporta_core::error::Result;
use reporta_core::session::{AuthState, CredentialRepository, Session};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Orchestrates the in-memory auth state and its durable persistence.
pub struct SessionService {
    /// Durable storage for the credential entries
    repository: Arc<dyn CredentialRepository>,
    /// Process-wide auth state
    state: Arc<RwLock<AuthState>>,
}

impl SessionService {
    /// Creates a new service. The state starts with `loading = true` until
    /// [`SessionService::restore`] has run.
    pub fn new(repository: Arc<dyn CredentialRepository>) -> Self {
        Self {
            repository,
            state: Arc::new(RwLock::new(AuthState::new())),
        }
    }

    /// Establishes a session from a successful login response.
    ///
    /// Persists the full session (overwriting any prior persisted session
    /// unconditionally) and then replaces the in-memory state. No client-side
    /// validation of the token is performed; trust is delegated to the API
    /// boundary.
    pub async fn login(&self, session: Session) -> Result<()> {
        self.repository.store(&session).await?;

        let mut state = self.state.write().await;
        state.replace(session);
        state.loading = false;

        Ok(())
    }

    /// Ends the current session.
    ///
    /// Clears the in-memory state inside a loading window, then purges the
    /// entire persisted credential namespace.
    pub async fn logout(&self) -> Result<()> {
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.clear();
            state.loading = false;
        }

        self.repository.clear().await
    }

    /// Restores the persisted session at process start.
    ///
    /// Reconstructs a session only when both persisted entries are present
    /// and the identity record parses; every other outcome (including a
    /// storage error) leaves the session absent. `loading` always transitions
    /// true → false around the check, regardless of outcome.
    pub async fn restore(&self) {
        {
            let mut state = self.state.write().await;
            state.loading = true;
        }

        let loaded = match self.repository.load().await {
            Ok(session) => session,
            Err(err) => {
                // Unreadable storage falls back to logged-out, not a fatal error
                tracing::warn!("Session restore failed, continuing logged out: {}", err);
                None
            }
        };

        let mut state = self.state.write().await;
        if let Some(session) = loaded {
            state.replace(session);
        }
        state.loading = false;
    }

    /// Returns a snapshot of the auth state for guard evaluation.
    pub async fn auth_state(&self) -> AuthState {
        self.state.read().await.clone()
    }

    /// Returns the current session, if any.
    pub async fn session(&self) -> Option<Session> {
        self.state.read().await.session.clone()
    }

    /// Returns the current bearer token, if a session is present.
    pub async fn token(&self) -> Option<String> {
        self.state.read().await.token().map(str::to_string)
    }

    /// Returns true while the session is not yet determined.
    pub async fn loading(&self) -> bool {
        self.state.read().await.loading
    }
}
