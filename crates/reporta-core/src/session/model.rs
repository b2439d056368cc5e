//! Session domain model.
//!
//! This module contains the Session entity that represents the authenticated
//! actor of the running client.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Classifies a session as an administrator or a regular user.
///
/// Administrators can approve/reject reports and see every report;
/// regular users manage only their own reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Admin,
    User,
}

/// The authenticated identity and credential held by the running client.
///
/// A session is either fully present (all fields set) or entirely absent;
/// there is no partial session. Identity fields and the bearer token are
/// set and cleared atomically by the session store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Server-assigned user identifier
    pub id: i64,
    /// Numeric role identifier as assigned by the server
    pub role_id: i64,
    /// Role classification
    pub role_type: Role,
    /// Opaque bearer credential sent with authenticated requests.
    /// No client-side validation is performed on it.
    pub token: String,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role_type == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_role_parses_from_cli_input() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("USER".parse::<Role>().unwrap(), Role::User);
        assert!("root".parse::<Role>().is_err());
    }

    #[test]
    fn test_is_admin() {
        let session = Session {
            id: 5,
            role_id: 1,
            role_type: Role::Admin,
            token: "t1".to_string(),
        };
        assert!(session.is_admin());
    }
}
