use actix_web::{HttpResponse, Responder, get};

pub const GREETING: &str = "Hello Kostya4";

/// # Root Endpoint
///
/// Returns the greeting as a JSON string.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting", body = String)
    ),
    tag = "Root"
)]
#[get("/")]
pub async fn read_root() -> impl Responder {
    HttpResponse::Ok().json(GREETING)
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(read_root);
}
