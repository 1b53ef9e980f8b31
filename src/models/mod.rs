/// # Health Status Response
///
/// Represents the operational status of the service with a timestamp.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "service": "email-checker",
///   "version": "0.2.0+sprint1",
///   "timestamp": "2024-03-10T15:30:45.123456789Z"
/// }
/// ```
pub mod health;

/// Request and response payloads for the email check endpoints.
pub mod email;

pub use email::{DomainMatchResponse, EmailDomainRequest, EmailRequest, EmailValidationResponse};
pub use health::HealthResponse;
