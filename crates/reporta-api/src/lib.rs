//! HTTP clients for the remote report-management API and the IP-geolocation
//! chain. All responses are expected as JSON; any non-2xx status is treated
//! as a uniform request failure with no distinct error-body parsing.

pub mod auth;
pub mod geo;
pub mod reports;

pub use auth::AuthClient;
pub use geo::{LocationResolver, UNKNOWN_LOCATION};
pub use reports::{ListQuery, ReportsClient};
