//! HTTP transport configuration.

use std::env;
use std::time::Duration;

use client_transport_core::TransportError;
use url::Url;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080/";

/// Connection settings for the game server.
#[derive(Clone, Debug)]
pub struct HttpConfig {
    /// Base URL every endpoint is resolved against.
    pub server_url: Url,
    /// Per-request timeout enforced by the HTTP client.
    pub request_timeout: Duration,
}

impl HttpConfig {
    pub fn new(server_url: Url) -> Self {
        Self {
            server_url,
            request_timeout: Duration::from_secs(10),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SERVER_URL` - Base URL of the game server (default: http://127.0.0.1:8080/)
    /// - `HTTP_TIMEOUT_MS` - Request timeout in milliseconds (default: 10000)
    pub fn from_env() -> Result<Self, TransportError> {
        let raw = env::var("SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let server_url = parse_server_url(&raw)?;

        let mut config = Self::new(server_url);
        if let Some(timeout) = env::var("HTTP_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.request_timeout = Duration::from_millis(timeout.max(1));
        }

        Ok(config)
    }
}

pub(crate) fn parse_server_url(raw: &str) -> Result<Url, TransportError> {
    let url = Url::parse(raw)
        .map_err(|e| TransportError::ConfigError(format!("Invalid SERVER_URL {}: {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(TransportError::ConfigError(format!(
            "Invalid SERVER_URL scheme: {}",
            url.scheme()
        )));
    }
    if url.cannot_be_a_base() {
        return Err(TransportError::ConfigError(format!(
            "SERVER_URL cannot be used as a base: {}",
            raw
        )));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_urls() {
        assert!(parse_server_url("http://localhost:9000").is_ok());
        assert!(parse_server_url("https://tactics.example.com/api/").is_ok());
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(matches!(
            parse_server_url("ws://localhost:9000"),
            Err(TransportError::ConfigError(_))
        ));
        assert!(parse_server_url("not a url").is_err());
    }

    #[test]
    fn default_url_points_at_localhost() {
        let config = HttpConfig::new(parse_server_url(DEFAULT_SERVER_URL).unwrap());
        assert_eq!(config.server_url.host_str(), Some("127.0.0.1"));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }
}
