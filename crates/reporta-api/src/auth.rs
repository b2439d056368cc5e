//! Authentication endpoints.

use reporta_core::error::{ReportaError, Result};
use reporta_core::session::{Role, Session};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the `/api/auth` endpoints.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    jwt: String,
    user: LoginUser,
}

#[derive(Debug, Deserialize)]
struct LoginUser {
    id: i64,
    role_id: i64,
    role_type: Role,
}

impl LoginResponse {
    fn into_session(self) -> Session {
        Session {
            id: self.user.id,
            role_id: self.user.role_id,
            role_type: self.user.role_type,
            token: self.jwt,
        }
    }
}

#[derive(Debug, Serialize)]
struct CreateUserRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    role_type: Role,
}

impl AuthClient {
    /// Creates a new client against the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Authenticates with email and password.
    ///
    /// On success the response's identity and token become the new session.
    /// The token is trusted as-is; authenticity checks are the server's job.
    ///
    /// # Errors
    ///
    /// Returns a `Request` error on transport failure or non-2xx status.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let url = format!("{}/api/auth/login", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&LoginRequest { email, password })
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| ReportaError::request("login", e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReportaError::request(
                "login",
                format!("status {}", status),
            ));
        }

        let login: LoginResponse = response
            .json()
            .await
            .map_err(|e| ReportaError::request("login", e.to_string()))?;

        Ok(login.into_session())
    }

    /// Registers a new account. Registration always creates a regular user.
    ///
    /// The response body carries no data of interest; only success/failure
    /// is reported.
    pub async fn create_user(&self, name: &str, email: &str, password: &str) -> Result<()> {
        let url = format!("{}/api/auth/create-user", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&CreateUserRequest {
                name,
                email,
                password,
                role_type: Role::User,
            })
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| ReportaError::request("register", e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReportaError::request(
                "register",
                format!("status {}", status),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_maps_to_session() {
        let raw = r#"{"jwt": "t1", "user": {"id": 5, "role_id": 1, "role_type": "admin"}}"#;
        let response: LoginResponse = serde_json::from_str(raw).unwrap();
        let session = response.into_session();

        assert_eq!(session.id, 5);
        assert_eq!(session.role_id, 1);
        assert_eq!(session.role_type, Role::Admin);
        assert_eq!(session.token, "t1");
    }

    #[test]
    fn test_create_user_request_wire_format() {
        let request = CreateUserRequest {
            name: "Ana",
            email: "a@b.com",
            password: "Str0ng#pw",
            role_type: Role::User,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["role_type"], "user");
        assert_eq!(value["email"], "a@b.com");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = AuthClient::new("https://api.example/");
        assert_eq!(client.base_url, "https://api.example");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_request_error() {
        let client = AuthClient::new("http://127.0.0.1:9");
        let err = client.login("a@b.com", "X").await.unwrap_err();
        assert!(err.is_request());
    }
}
