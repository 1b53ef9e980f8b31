use crate::config::ServerConfig;
use crate::openapi::ApiDoc;
use crate::routes;
use actix_web::{App, HttpServer, dev::Server, middleware::Logger};
use log::info;
use std::net::SocketAddr;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// A bound, not yet running HTTP server.
///
/// Owned by the caller: build it, read back the bound address if needed, then
/// [`run`](Application::run) it.
pub struct Application {
    server: Server,
    addrs: Vec<SocketAddr>,
}

impl Application {
    /// Binds the listener described by `config`.
    ///
    /// Port `0` picks a free port; see [`Application::addrs`].
    pub fn build(config: &ServerConfig) -> std::io::Result<Self> {
        let http_server = HttpServer::new(|| {
            let openapi = ApiDoc::openapi();

            App::new()
                .wrap(Logger::default())
                .configure(routes::configure)
                .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
        })
        .bind((config.host.as_str(), config.port))?;

        let addrs = http_server.addrs();
        let server = http_server.run();

        Ok(Self { server, addrs })
    }

    pub fn addrs(&self) -> &[SocketAddr] {
        &self.addrs
    }

    pub async fn run(self) -> std::io::Result<()> {
        for addr in &self.addrs {
            info!("listening on http://{addr}");
        }
        self.server.await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_build_binds_free_port() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        };
        let app = Application::build(&config).expect("bind should succeed");

        assert!(!app.addrs().is_empty());
        assert!(app.addrs().iter().all(|addr| addr.port() != 0));
    }

    #[actix_web::test]
    async fn test_build_reports_bind_error() {
        let config = ServerConfig {
            host: "not a host name".to_string(),
            port: 0,
        };
        assert!(Application::build(&config).is_err());
    }
}
