use serde::{Deserialize, Serialize};

/// Name of the environment variable supplying the API base URL.
pub const SERVER_URL_ENV: &str = "REPORTA_SERVER_URL";

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ConfigRoot {
    /// Base URL of the report-management API
    pub server_url: Option<String>,
}

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub server_url: String,
}
