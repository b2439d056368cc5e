pub mod auth;
pub mod report;

use anyhow::{Result, bail};
use reporta_application::SessionService;
use reporta_core::config::ClientConfig;
use reporta_core::guard::{self, AccessDecision};
use reporta_core::session::Session;
use reporta_infrastructure::{FileCredentialStore, load_client_config};
use std::sync::Arc;

/// Shared wiring for every command: resolved configuration plus the session
/// store, restored from durable storage.
pub struct AppContext {
    pub config: ClientConfig,
    pub session: Arc<SessionService>,
}

pub async fn app_context() -> Result<AppContext> {
    let config = load_client_config()?;
    let store = FileCredentialStore::default_location()?;

    let session = Arc::new(SessionService::new(Arc::new(store)));
    session.restore().await;

    Ok(AppContext { config, session })
}

/// Evaluates the access guard for a protected command.
///
/// The guard is re-evaluated on every command invocation; the redirect is
/// executed here as an instruction to sign in.
pub async fn require_session(ctx: &AppContext) -> Result<Session> {
    match guard::evaluate(&ctx.session.auth_state().await) {
        AccessDecision::Allow => Ok(ctx
            .session
            .session()
            .await
            .expect("guard allowed without a session")),
        AccessDecision::RedirectToLogin => {
            bail!("Not signed in. Run `reporta login` first.")
        }
        AccessDecision::Undetermined => {
            bail!("Session state not determined yet; try again.")
        }
    }
}
