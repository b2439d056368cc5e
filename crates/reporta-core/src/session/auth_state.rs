//! Process-wide authentication state container.

use super::model::Session;

/// Holds the current authentication state of the process.
///
/// The state starts with `loading = true` until the initial restore from
/// persisted storage has resolved, so consumers can avoid acting on a
/// not-yet-determined session. The only mutations are [`AuthState::replace`]
/// and [`AuthState::clear`], exposed through the session store's
/// login/logout/restore operations; no other component mutates this directly.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    /// Current session, if any
    pub session: Option<Session>,
    /// True only during the initial restore phase and logout teardown
    pub loading: bool,
}

impl AuthState {
    /// Creates the initial state: no session, restore pending.
    pub fn new() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }

    /// Replaces the current session wholesale.
    pub fn replace(&mut self, session: Session) {
        self.session = Some(session);
    }

    /// Clears the current session.
    pub fn clear(&mut self) {
        self.session = None;
    }

    /// Returns true if a session is present.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the current bearer token, if a session is present.
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::model::Role;

    fn test_session() -> Session {
        Session {
            id: 5,
            role_id: 2,
            role_type: Role::User,
            token: "tok".to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_loading_and_absent() {
        let state = AuthState::new();
        assert!(state.loading);
        assert!(!state.is_authenticated());
        assert_eq!(state.token(), None);
    }

    #[test]
    fn test_replace_sets_session() {
        let mut state = AuthState::new();
        state.replace(test_session());
        assert!(state.is_authenticated());
        assert_eq!(state.token(), Some("tok"));
    }

    #[test]
    fn test_clear_removes_session() {
        let mut state = AuthState::new();
        state.replace(test_session());
        state.clear();
        assert!(!state.is_authenticated());
        assert_eq!(state.token(), None);
    }
}
