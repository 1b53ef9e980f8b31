use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// route handlers and served by Swagger UI.
///
/// # Endpoints
/// - Greeting: `GET /`
/// - Health Check: `GET /api/v1/health`
/// - Email Validation: `POST /api/v1/validate-email`, `POST /api/v1/email-domain`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root::read_root,
        crate::routes::health::health,
        crate::routes::email::validate_email,
        crate::routes::email::email_domain,
    ),
    components(
        schemas(
            crate::models::HealthResponse,
            crate::models::EmailRequest,
            crate::models::EmailDomainRequest,
            crate::models::EmailValidationResponse,
            crate::models::DomainMatchResponse
        )
    ),
    tags(
        (name = "Root", description = "Greeting endpoint"),
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Email Validation", description = "Syntactic email checks")
    ),
    info(
        description = "Syntactic email address checks over HTTP",
        title = "Email Checker API",
        version = "0.2.0+sprint1",
    )
)]
pub struct ApiDoc;
