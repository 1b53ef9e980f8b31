use email_checker::config::ServerConfig;
use email_checker::errors::ServerError;
use email_checker::server::Application;

/// Email Checker Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - `GET /` greeting and the `/api/v1` email check endpoints
/// - Swagger UI at `/swagger-ui/`, OpenAPI spec at `/api-docs/openapi.json`
///
/// # Configuration
/// - `HOST` / `PORT` (default `0.0.0.0:8000`), also read from `.env`
/// - `RUST_LOG` controls log verbosity (default `info`)
#[actix_web::main]
async fn main() -> Result<(), ServerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env()?;
    let app = Application::build(&config)?;
    app.run().await?;

    Ok(())
}
