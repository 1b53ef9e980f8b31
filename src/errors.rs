use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
    #[error("HOST must not be empty")]
    EmptyHost,
}

/// Failures while starting or running the HTTP server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_messages() {
        assert_eq!(
            ConfigError::InvalidPort("abc".to_string()).to_string(),
            "PORT must be a number between 0 and 65535, got \"abc\""
        );
        assert_eq!(ConfigError::EmptyHost.to_string(), "HOST must not be empty");
    }

    #[test]
    fn server_error_wraps_sources() {
        let err: ServerError = ConfigError::EmptyHost.into();
        assert_eq!(err.to_string(), "invalid configuration: HOST must not be empty");

        let err: ServerError = std::io::Error::new(std::io::ErrorKind::AddrInUse, "taken").into();
        assert!(matches!(err, ServerError::Io(_)));
        assert_eq!(err.to_string(), "server I/O error: taken");
    }
}
