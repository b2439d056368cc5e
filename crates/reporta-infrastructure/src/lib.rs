pub mod config_service;
pub mod credential_store;
pub mod paths;

pub use config_service::load_client_config;
pub use credential_store::FileCredentialStore;
pub use paths::ReportaPaths;
