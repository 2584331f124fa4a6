//! Server configuration loaded from environment variables.

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Port for the HTTP API (from STRATEGIO_PORT)
    pub port: u16,
    /// Allowed CORS origins (from STRATEGIO_CORS_ORIGINS, comma-separated)
    pub cors_origins: Option<Vec<String>>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let port = std::env::var("STRATEGIO_PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let cors_origins = std::env::var("STRATEGIO_CORS_ORIGINS")
            .ok()
            .map(|s| parse_origins(&s))
            .filter(|origins| !origins.is_empty());

        Self { port, cors_origins }
    }

    /// Local defaults: default port, any origin.
    pub fn local() -> Self {
        Self {
            port: DEFAULT_PORT,
            cors_origins: None,
        }
    }

    /// Create a config restricted to specific CORS origins.
    pub fn with_cors_origins(origins: Vec<String>) -> Self {
        Self {
            cors_origins: Some(origins),
            ..Self::local()
        }
    }

    /// Override the port, e.g. from a CLI flag.
    pub fn with_port(self, port: u16) -> Self {
        Self { port, ..self }
    }

    /// Permissive CORS unless origins are configured. Origins that are not
    /// valid header values are skipped with a warning.
    pub fn cors_layer(&self) -> CorsLayer {
        match &self.cors_origins {
            None => CorsLayer::permissive(),
            Some(origins) => {
                let allowed: Vec<HeaderValue> = origins
                    .iter()
                    .filter_map(|origin| match HeaderValue::from_str(origin) {
                        Ok(value) => Some(value),
                        Err(_) => {
                            tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                            None
                        }
                    })
                    .collect();
                CorsLayer::new()
                    .allow_origin(AllowOrigin::list(allowed))
                    .allow_methods(tower_http::cors::Any)
                    .allow_headers(tower_http::cors::Any)
            }
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_origins(s: &str) -> Vec<String> {
    s.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_config_allows_any_origin() {
        let config = ServerConfig::local();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.cors_origins.is_none());
    }

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_origins(" http://a.test, ,http://b.test "),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn with_port_keeps_origins() {
        let config = ServerConfig::with_cors_origins(vec!["http://a.test".into()]).with_port(8080);
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, Some(vec!["http://a.test".to_string()]));
    }
}
