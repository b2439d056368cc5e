//! Client configuration loading.
//!
//! The API base URL is the only external configuration surface. It is taken
//! from the `REPORTA_SERVER_URL` environment variable when set, otherwise
//! from `config.toml` under the platform config directory.

use crate::paths::ReportaPaths;
use reporta_core::config::{ClientConfig, ConfigRoot, SERVER_URL_ENV};
use reporta_core::error::{ReportaError, Result};
use std::fs;
use std::path::Path;

/// Loads the client configuration from the default sources.
///
/// # Errors
///
/// Returns a `Config` error when no source supplies a server URL, or when
/// the config file exists but cannot be read or parsed.
pub fn load_client_config() -> Result<ClientConfig> {
    let config_path = ReportaPaths::config_file()
        .map_err(|e| ReportaError::config(e.to_string()))?;
    resolve(std::env::var(SERVER_URL_ENV).ok(), &config_path)
}

/// Resolves the configuration from an explicit env value and config file path.
///
/// The env value wins when present and non-empty. A missing config file is
/// not an error by itself; only the absence of any source is.
pub fn resolve(env_value: Option<String>, config_path: &Path) -> Result<ClientConfig> {
    if let Some(url) = env_value {
        let url = url.trim();
        if !url.is_empty() {
            return Ok(ClientConfig {
                server_url: url.trim_end_matches('/').to_string(),
            });
        }
    }

    if let Some(url) = load_from_file(config_path)? {
        return Ok(ClientConfig {
            server_url: url.trim_end_matches('/').to_string(),
        });
    }

    Err(ReportaError::config(format!(
        "No server URL configured: set {} or add server_url to {:?}",
        SERVER_URL_ENV, config_path
    )))
}

/// Reads the server URL from a config file, if the file exists.
///
/// # Returns
///
/// - `Ok(Some(url))`: the file exists and contains a non-empty `server_url`
/// - `Ok(None)`: the file does not exist, or it sets no `server_url`
/// - `Err(_)`: the file exists but cannot be read or parsed
fn load_from_file(config_path: &Path) -> Result<Option<String>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(config_path)?;
    if content.trim().is_empty() {
        return Ok(None);
    }

    let root: ConfigRoot = toml::from_str(&content)?;
    tracing::debug!("Loaded config from {:?}", config_path);
    Ok(root.server_url.filter(|url| !url.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_env_value_wins() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "server_url = \"https://file.example\"").unwrap();

        let config = resolve(
            Some("https://env.example/".to_string()),
            temp_file.path(),
        )
        .unwrap();
        assert_eq!(config.server_url, "https://env.example");
    }

    #[test]
    fn test_file_fallback() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "server_url = \"https://file.example\"").unwrap();

        let config = resolve(None, temp_file.path()).unwrap();
        assert_eq!(config.server_url, "https://file.example");
    }

    #[test]
    fn test_missing_sources_is_config_error() {
        let err = resolve(None, Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "server_url = [not toml").unwrap();

        let err = resolve(None, temp_file.path()).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_empty_env_value_falls_through() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "server_url = \"https://file.example\"").unwrap();

        let config = resolve(Some("  ".to_string()), temp_file.path()).unwrap();
        assert_eq!(config.server_url, "https://file.example");
    }
}
