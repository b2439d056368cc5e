//! Credential repository trait.
//!
//! Defines the interface for durable session persistence.

use super::model::Session;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for persisting the authenticated session.
///
/// This trait decouples the session store from the specific storage mechanism.
/// Implementations persist the session as two entries: the raw bearer token
/// and a serialized identity record (never containing the token or password).
///
/// # Implementation Notes
///
/// A malformed persisted identity record is not an error: `load` must fall
/// back to `Ok(None)` so that the caller silently treats the process as
/// logged out.
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Persists the full session, overwriting any prior persisted session.
    async fn store(&self, session: &Session) -> Result<()>;

    /// Loads the persisted session.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Session))`: both entries present and the identity record parsed
    /// - `Ok(None)`: entries missing, or the identity record is malformed
    /// - `Err(_)`: storage could not be accessed at all
    async fn load(&self) -> Result<Option<Session>>;

    /// Purges the entire persisted credential namespace.
    async fn clear(&self) -> Result<()>;
}
