use actix_web::web;

/// # Root Endpoint
///
/// `GET /` answers with a fixed greeting string.
pub mod root;

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "service": "email-checker",
///   "version": "0.2.0+sprint1",
///   "timestamp": "2023-10-05T12:34:56.789Z"
/// }
/// ```
pub mod health;

/// # Email Check Endpoints
///
/// Thin JSON wrappers around the syntax check and the domain matcher.
/// Both always answer 200 with the result; only an unparsable body is a 400.
pub mod email;


/// # API Route Configuration
///
/// Mounts the greeting at `/` and the versioned API under `/api/v1`.
///
/// ```text
/// GET  /                       - Greeting
/// GET  /api/v1/health          - Service health status
/// POST /api/v1/validate-email  - Syntax check
/// POST /api/v1/email-domain    - Domain match
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(root::configure_routes).service(
        web::scope("/api/v1")
            .configure(health::configure_routes)
            .configure(email::configure_routes),
    );
}
