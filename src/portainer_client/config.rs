use std::env;
use std::time::Duration;

/// Connection settings for a Portainer instance
#[derive(Debug, Clone)]
pub struct PortainerConfig {
    /// Hostname or IP address of the Portainer instance
    pub host: String,
    /// TCP port the API listens on
    pub port: u16,
    /// URL scheme, "http" or "https"
    pub schema: String,
    /// Username presented to the auth endpoint
    pub username: String,
    /// Password presented to the auth endpoint
    pub password: String,
    /// Path prefix of the API, usually "/api"
    pub base_path: String,
    /// Per-request timeout applied to every HTTP round trip
    pub request_timeout: Duration,
}

impl Default for PortainerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 9000,
            schema: "http".to_string(),
            username: String::new(),
            password: String::new(),
            base_path: "/api".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl PortainerConfig {
    /// Build a configuration from `PORTAINER_*` environment variables,
    /// falling back to the defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("PORTAINER_HOST").unwrap_or(defaults.host),
            port: env::var("PORTAINER_PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(defaults.port),
            schema: env::var("PORTAINER_SCHEMA").unwrap_or(defaults.schema),
            username: env::var("PORTAINER_USER").unwrap_or(defaults.username),
            password: env::var("PORTAINER_PASSWORD").unwrap_or(defaults.password),
            base_path: env::var("PORTAINER_BASE_PATH").unwrap_or(defaults.base_path),
            request_timeout: defaults.request_timeout,
        }
    }
}
