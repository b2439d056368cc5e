pub mod report_service;
pub mod session_service;
pub mod sign_in;

pub use report_service::{ReportInput, ReportService};
pub use session_service::SessionService;
pub use sign_in::{AuthFlow, SignInOutcome};
