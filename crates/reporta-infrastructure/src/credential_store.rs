//! Filesystem-backed credential storage.
//!
//! Persists the session as two entries in a dedicated directory: the raw
//! bearer token (`jwt`) and a serialized identity record (`identity.json`).
//! The token and password are never embedded in the identity record.

use crate::paths::ReportaPaths;
use async_trait::async_trait;
use reporta_core::error::{ReportaError, Result};
use reporta_core::session::{CredentialRepository, Role, Session};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const TOKEN_FILE: &str = "jwt";
const IDENTITY_FILE: &str = "identity.json";

/// Persisted identity record.
///
/// Carries only what is needed to reconstruct the session identity; the
/// bearer token lives in its own file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct IdentityRecord {
    id: i64,
    role_id: i64,
    role_type: Role,
    /// RFC 3339 timestamp of the last write
    #[serde(default)]
    saved_at: Option<String>,
}

/// Manages session persistence on the local filesystem.
///
/// The store owns its base directory outright: `clear` wipes the whole
/// directory, which is why nothing unrelated may be co-located there.
pub struct FileCredentialStore {
    base_dir: PathBuf,
}

impl FileCredentialStore {
    /// Creates a new `FileCredentialStore` rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Creates a store at the default location under the platform config dir.
    pub fn default_location() -> Result<Self> {
        let base_dir = ReportaPaths::credentials_dir()
            .map_err(|e| ReportaError::config(e.to_string()))?;
        Self::new(base_dir)
    }

    fn token_path(&self) -> PathBuf {
        self.base_dir.join(TOKEN_FILE)
    }

    fn identity_path(&self) -> PathBuf {
        self.base_dir.join(IDENTITY_FILE)
    }

    /// Writes a file and restricts it to user read/write on unix.
    fn write_restricted(path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(path, permissions)?;
        }

        Ok(())
    }
}

#[async_trait]
impl CredentialRepository for FileCredentialStore {
    async fn store(&self, session: &Session) -> Result<()> {
        fs::create_dir_all(&self.base_dir)?;

        let record = IdentityRecord {
            id: session.id,
            role_id: session.role_id,
            role_type: session.role_type,
            saved_at: Some(chrono::Utc::now().to_rfc3339()),
        };
        let json = serde_json::to_string_pretty(&record)?;

        Self::write_restricted(&self.token_path(), &session.token)?;
        Self::write_restricted(&self.identity_path(), &json)?;

        tracing::debug!("Persisted session for user {}", session.id);
        Ok(())
    }

    async fn load(&self) -> Result<Option<Session>> {
        let token_path = self.token_path();
        let identity_path = self.identity_path();

        if !token_path.exists() || !identity_path.exists() {
            return Ok(None);
        }

        let token = fs::read_to_string(&token_path)?.trim().to_string();
        if token.is_empty() {
            return Ok(None);
        }

        let json = fs::read_to_string(&identity_path)?;
        let record: IdentityRecord = match serde_json::from_str(&json) {
            Ok(record) => record,
            Err(err) => {
                // Malformed identity data falls back to logged-out, not a fatal error
                tracing::warn!("Discarding malformed identity record: {}", err);
                return Ok(None);
            }
        };

        Ok(Some(Session {
            id: record.id,
            role_id: record.role_id,
            role_type: record.role_type,
            token,
        }))
    }

    async fn clear(&self) -> Result<()> {
        if self.base_dir.exists() {
            fs::remove_dir_all(&self.base_dir)?;
        }
        fs::create_dir_all(&self.base_dir)?;
        tracing::debug!("Cleared credential storage");
        Ok(())
    }
}
