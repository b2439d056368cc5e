//! Session domain: authenticated identity, auth state container, persistence trait.

pub mod auth_state;
pub mod model;
pub mod repository;

pub use auth_state::AuthState;
pub use model::{Role, Session};
pub use repository::CredentialRepository;
