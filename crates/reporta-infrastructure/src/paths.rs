//! Unified path management for reporta configuration and credential files.
//!
//! All paths resolve under the platform config directory so behavior is
//! consistent across Linux, macOS, and Windows.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for reporta.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/reporta/           # Config directory
/// ├── config.toml              # Client configuration (server URL)
/// └── credentials/             # Durable session storage
///     ├── jwt                  # Raw bearer token
///     └── identity.json        # Serialized identity record
/// ```
pub struct ReportaPaths;

impl ReportaPaths {
    /// Returns the reporta configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/reporta/`)
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("reporta"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the credential storage directory.
    ///
    /// This directory is owned exclusively by the credential store: logout
    /// purges everything under it, so nothing unrelated may ever live here.
    pub fn credentials_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("credentials"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = ReportaPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("reporta"));
    }

    #[test]
    fn test_config_file() {
        let config_file = ReportaPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        let config_dir = ReportaPaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
    }

    #[test]
    fn test_credentials_dir() {
        let credentials_dir = ReportaPaths::credentials_dir().unwrap();
        assert!(credentials_dir.ends_with("credentials"));
        let config_dir = ReportaPaths::config_dir().unwrap();
        assert!(credentials_dir.starts_with(&config_dir));
    }
}
