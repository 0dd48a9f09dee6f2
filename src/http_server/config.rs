//! Listener and CORS settings
//!
//! The JSON shape stays flat (`host`, `port`, `cors_origins`) so it can be
//! flattened into the service config file.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Which browser origins may call the API.
///
/// Serialized as the `cors_origins` list; an empty list means any origin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub enum CorsPolicy {
    #[default]
    AnyOrigin,
    Origins(Vec<String>),
}

impl From<Vec<String>> for CorsPolicy {
    fn from(origins: Vec<String>) -> Self {
        if origins.is_empty() {
            CorsPolicy::AnyOrigin
        } else {
            CorsPolicy::Origins(origins)
        }
    }
}

impl From<CorsPolicy> for Vec<String> {
    fn from(policy: CorsPolicy) -> Self {
        match policy {
            CorsPolicy::AnyOrigin => Vec::new(),
            CorsPolicy::Origins(origins) => origins,
        }
    }
}

impl CorsPolicy {
    /// First origin that is not a valid header value, if any
    pub fn invalid_origin(&self) -> Option<&str> {
        match self {
            CorsPolicy::AnyOrigin => None,
            CorsPolicy::Origins(origins) => origins
                .iter()
                .find(|o| HeaderValue::from_str(o).is_err())
                .map(String::as_str),
        }
    }

    /// Build the CORS middleware. Any method and header is allowed.
    pub fn layer(&self) -> CorsLayer {
        let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

        match self {
            CorsPolicy::AnyOrigin => layer.allow_origin(Any),
            CorsPolicy::Origins(origins) => {
                let allowed: Vec<HeaderValue> = origins
                    .iter()
                    .filter_map(|origin| match HeaderValue::from_str(origin) {
                        Ok(value) => Some(value),
                        Err(_) => {
                            tracing::warn!(%origin, "ignoring unparsable CORS origin");
                            None
                        }
                    })
                    .collect();
                layer.allow_origin(AllowOrigin::list(allowed))
            }
        }
    }
}

/// Where the server listens and who may call it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host name or address (default: 0.0.0.0)
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default, rename = "cors_origins")]
    pub cors: CorsPolicy,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors: CorsPolicy::default(),
        }
    }
}

impl HttpServerConfig {
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// `host:port`, resolved at bind time so host names work too
    pub fn bind_target(&self) -> String {
        format!("{}:{}", self.host.trim(), self.port)
    }

    /// Reject settings that cannot be bound or turned into CORS headers
    pub fn validate(&self) -> Result<(), String> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err("host must not be empty".to_string());
        }
        if host.contains(char::is_whitespace) {
            return Err(format!("host '{}' must not contain whitespace", host));
        }
        if let Some(origin) = self.cors.invalid_origin() {
            return Err(format!("invalid CORS origin '{}'", origin));
        }
        Ok(())
    }
}
