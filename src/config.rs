use crate::errors::ConfigError;
use std::env;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Where the HTTP server listens.
///
/// Read from the `HOST` and `PORT` environment variables, after loading a
/// `.env` file if one is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
    }

    /// Builds a config from raw variable values; `None` falls back to the default.
    pub fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let host = match host {
            Some(host) if host.trim().is_empty() => return Err(ConfigError::EmptyHost),
            Some(host) => host.trim().to_string(),
            None => DEFAULT_HOST.to_string(),
        };

        let port = match port {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_vars(None, None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.address(), "0.0.0.0:8000");
    }

    #[test]
    fn reads_host_and_port() {
        let config =
            ServerConfig::from_vars(Some("127.0.0.1".to_string()), Some(" 9090 ".to_string()))
                .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn rejects_bad_port() {
        let err = ServerConfig::from_vars(None, Some("http".to_string())).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("http".to_string()));

        let err = ServerConfig::from_vars(None, Some("70000".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }

    #[test]
    fn rejects_blank_host() {
        let err = ServerConfig::from_vars(Some("  ".to_string()), None).unwrap_err();
        assert_eq!(err, ConfigError::EmptyHost);
    }
}
