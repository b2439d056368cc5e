//! Access guard and navigation decisions.
//!
//! Pure decision logic only: deciding whether a protected view may render,
//! and where a fresh sign-in should land. Executing the navigation is the
//! caller's concern.

use crate::session::{AuthState, Role, Session};

/// Outcome of evaluating the access guard for a protected view.
///
/// `Undetermined` mirrors `loading = true`: the session has not been resolved
/// yet and nothing should render. Once resolved, the outcome is `Allow` or
/// `RedirectToLogin`. The decision must be re-evaluated on every entry to a
/// protected view, never cached across navigations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Session not yet determined; render nothing
    Undetermined,
    /// Session present; render the protected view
    Allow,
    /// No session; redirect to the login entry point
    RedirectToLogin,
}

/// Evaluates the access guard against the current auth state.
pub fn evaluate(state: &AuthState) -> AccessDecision {
    if state.loading {
        return AccessDecision::Undetermined;
    }
    if state.is_authenticated() {
        AccessDecision::Allow
    } else {
        AccessDecision::RedirectToLogin
    }
}

/// Destination view after a successful sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingRoute {
    /// Admin report management view
    Reports,
    /// General user menu
    Menu,
}

/// Decides where a fresh sign-in lands.
///
/// Administrators (role id 1 with the admin role type) go straight to the
/// reports view; everyone else lands on the menu.
pub fn landing_route(session: &Session) -> LandingRoute {
    if session.role_id == 1 && session.role_type == Role::Admin {
        LandingRoute::Reports
    } else {
        LandingRoute::Menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role_id: i64, role_type: Role) -> Session {
        Session {
            id: 5,
            role_id,
            role_type,
            token: "t1".to_string(),
        }
    }

    #[test]
    fn test_loading_is_always_undetermined() {
        let mut state = AuthState::new();
        assert_eq!(evaluate(&state), AccessDecision::Undetermined);

        // Even with a session present, loading suppresses rendering
        state.replace(session(1, Role::Admin));
        assert_eq!(evaluate(&state), AccessDecision::Undetermined);
    }

    #[test]
    fn test_resolved_state_allows_iff_session_present() {
        let mut state = AuthState::new();
        state.loading = false;
        assert_eq!(evaluate(&state), AccessDecision::RedirectToLogin);

        state.replace(session(2, Role::User));
        assert_eq!(evaluate(&state), AccessDecision::Allow);

        state.clear();
        assert_eq!(evaluate(&state), AccessDecision::RedirectToLogin);
    }

    #[test]
    fn test_admin_lands_on_reports() {
        assert_eq!(
            landing_route(&session(1, Role::Admin)),
            LandingRoute::Reports
        );
    }

    #[test]
    fn test_everyone_else_lands_on_menu() {
        assert_eq!(landing_route(&session(2, Role::User)), LandingRoute::Menu);
        // Admin role type without the admin role id still goes to the menu
        assert_eq!(landing_route(&session(2, Role::Admin)), LandingRoute::Menu);
    }
}
