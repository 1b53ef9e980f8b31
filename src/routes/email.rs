use crate::models::{DomainMatchResponse, EmailDomainRequest, EmailRequest, EmailValidationResponse};
use crate::validation::{is_email_from_domain, is_valid_email};
use actix_web::{HttpResponse, Responder, post, web};
use log::debug;

/// # Email Syntax Check
///
/// Runs the syntactic email check on the submitted address. The address is
/// checked as sent, without trimming.
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with `email` field
///
/// ## Responses
/// - **200 OK**: `{ "email": ..., "is_valid": bool }`
/// - **400 Bad Request**: body is not a valid `EmailRequest`
///
/// ## Example Request
/// ```json
/// { "email": "user@example.com" }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/validate-email",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Syntax check result", body = EmailValidationResponse),
        (status = 400, description = "Malformed request body")
    ),
    tag = "Email Validation"
)]
#[post("/validate-email")]
pub async fn validate_email(req: web::Json<EmailRequest>) -> impl Responder {
    let EmailRequest { email } = req.into_inner();
    let is_valid = is_valid_email(&email);
    debug!("validate-email {email:?} -> {is_valid}");

    HttpResponse::Ok().json(EmailValidationResponse { email, is_valid })
}

/// # Email Domain Check
///
/// Reports whether the address is valid and belongs to exactly the given
/// domain. The comparison is case-sensitive; invalid addresses never match.
///
/// ## Example Request
/// ```json
/// { "email": "user@example.com", "domain": "example.com" }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/email-domain",
    request_body = EmailDomainRequest,
    responses(
        (status = 200, description = "Domain match result", body = DomainMatchResponse),
        (status = 400, description = "Malformed request body")
    ),
    tag = "Email Validation"
)]
#[post("/email-domain")]
pub async fn email_domain(req: web::Json<EmailDomainRequest>) -> impl Responder {
    let EmailDomainRequest { email, domain } = req.into_inner();
    let is_valid = is_valid_email(&email);
    let matches = is_email_from_domain(&email, &domain);
    debug!("email-domain {email:?} in {domain:?} -> {matches}");

    HttpResponse::Ok().json(DomainMatchResponse {
        email,
        domain,
        is_valid,
        matches,
    })
}

/// Configures email check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(validate_email).service(email_domain);
}
