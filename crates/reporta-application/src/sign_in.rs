//! Sign-in and registration flows.
//!
//! Composes the auth API with the session store and the landing-route
//! decision. Navigation execution stays with the caller.

use crate::session_service::SessionService;
use reporta_api::auth::AuthClient;
use reporta_core::error::{ReportaError, Result};
use reporta_core::guard::{self, LandingRoute};
use reporta_core::password;
use reporta_core::session::Session;
use std::sync::Arc;

/// Result of a successful sign-in: the established session and where the
/// caller should navigate next.
#[derive(Debug, Clone, PartialEq)]
pub struct SignInOutcome {
    pub session: Session,
    pub landing: LandingRoute,
}

pub struct AuthFlow {
    auth: AuthClient,
    session: Arc<SessionService>,
}

impl AuthFlow {
    pub fn new(auth: AuthClient, session: Arc<SessionService>) -> Self {
        Self { auth, session }
    }

    /// Authenticates and establishes the session.
    ///
    /// On success the session is persisted through the session store and the
    /// landing route is decided from the role. A failed login surfaces as a
    /// `Request` error for the caller to present as a notice.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignInOutcome> {
        let session = self.auth.login(email, password).await?;
        self.session.login(session.clone()).await?;

        let landing = guard::landing_route(&session);
        tracing::info!("Signed in as user {} ({})", session.id, session.role_type);

        Ok(SignInOutcome { session, landing })
    }

    /// Registers a new account.
    ///
    /// Name and email must be non-empty and the password must satisfy the
    /// strength policy; all checked locally before any network call.
    /// Registration does not sign the user in.
    pub async fn register(&self, name: &str, email: &str, pass: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ReportaError::validation("name"));
        }
        if email.trim().is_empty() {
            return Err(ReportaError::validation("email"));
        }
        password::validate(pass)?;

        self.auth.create_user(name, email, pass).await
    }

    /// Ends the current session.
    pub async fn sign_out(&self) -> Result<()> {
        self.session.logout().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reporta_infrastructure::FileCredentialStore;
    use tempfile::TempDir;

    // Unroutable endpoint: a validation error proves no request went out.
    fn flow(dir: &TempDir) -> AuthFlow {
        let store = FileCredentialStore::new(dir.path()).unwrap();
        let session = Arc::new(SessionService::new(Arc::new(store)));
        AuthFlow::new(AuthClient::new("http://127.0.0.1:9"), session)
    }

    #[tokio::test]
    async fn test_register_rejects_weak_password_before_network() {
        let temp_dir = TempDir::new().unwrap();
        let err = flow(&temp_dir)
            .register("Ana", "a@b.com", "weak")
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_register_rejects_empty_name() {
        let temp_dir = TempDir::new().unwrap();
        let err = flow(&temp_dir)
            .register("  ", "a@b.com", "Str0ng#pw")
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_failed_login_is_a_request_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = flow(&temp_dir).sign_in("a@b.com", "X").await.unwrap_err();
        assert!(err.is_request());
    }
}
