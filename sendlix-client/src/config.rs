//! Client configuration.

use sendlix_core::TransportError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tonic::transport::{ClientTlsConfig, Endpoint};

/// Default address of the Sendlix API
pub const DEFAULT_SERVER_ADDRESS: &str = "api.sendlix.com:443";

/// Environment variable overriding [`ClientConfig::server_address`]
pub const ENV_SERVER_ADDRESS: &str = "SENDLIX_SERVER_ADDRESS";
/// Environment variable overriding [`ClientConfig::user_agent`]
pub const ENV_USER_AGENT: &str = "SENDLIX_USER_AGENT";
/// Environment variable overriding [`ClientConfig::insecure`]
pub const ENV_INSECURE: &str = "SENDLIX_INSECURE";

/// Connection settings shared by the auth exchange and the API clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// `host:port` of the API, or a full `http://`/`https://` URI
    pub server_address: String,
    pub user_agent: String,
    /// Use a plaintext channel. Only meant for local test servers.
    pub insecure: bool,
    pub connect_timeout: Option<Duration>,
    /// Deadline for each API call, sent as `grpc-timeout`. It also bounds
    /// the token exchange a call may trigger.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            user_agent: format!("sendlix-rust-sdk/{}", env!("CARGO_PKG_VERSION")),
            insecure: false,
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by `SENDLIX_*` environment variables when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(address) = std::env::var(ENV_SERVER_ADDRESS) {
            config.server_address = address;
        }
        if let Ok(user_agent) = std::env::var(ENV_USER_AGENT) {
            config.user_agent = user_agent;
        }
        if let Ok(insecure) = std::env::var(ENV_INSECURE) {
            config.insecure = matches!(insecure.trim(), "1" | "true" | "TRUE" | "yes");
        }
        config
    }

    pub fn with_server_address(mut self, address: impl Into<String>) -> Self {
        self.server_address = address.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// The URI channels connect to
    pub fn uri(&self) -> String {
        if self.server_address.contains("://") {
            self.server_address.clone()
        } else if self.insecure {
            format!("http://{}", self.server_address)
        } else {
            format!("https://{}", self.server_address)
        }
    }

    /// Build a tonic endpoint. No connection is attempted.
    pub fn endpoint(&self) -> Result<Endpoint, TransportError> {
        let uri = self.uri();
        let mut endpoint = Endpoint::from_shared(uri.clone())
            .map_err(|e| TransportError::InvalidEndpoint(format!("{}: {}", uri, e)))?
            .user_agent(self.user_agent.clone())
            .map_err(|e| TransportError::InvalidEndpoint(format!("invalid user agent: {}", e)))?;

        if let Some(timeout) = self.connect_timeout {
            endpoint = endpoint.connect_timeout(timeout);
        }
        if let Some(timeout) = self.request_timeout {
            endpoint = endpoint.timeout(timeout);
        }
        if uri.starts_with("https://") {
            endpoint = endpoint
                .tls_config(ClientTlsConfig::new().with_webpki_roots())
                .map_err(|e| TransportError::Tls(e.to_string()))?;
        }

        Ok(endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.server_address, "api.sendlix.com:443");
        assert!(config.user_agent.starts_with("sendlix-rust-sdk/"));
        assert!(!config.insecure);
        assert_eq!(config.uri(), "https://api.sendlix.com:443");
    }

    #[test]
    fn test_uri_scheme() {
        let config = ClientConfig::default()
            .with_server_address("localhost:8080")
            .with_insecure(true);
        assert_eq!(config.uri(), "http://localhost:8080");

        let config = ClientConfig::default().with_server_address("http://127.0.0.1:9000");
        assert_eq!(config.uri(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_endpoint_plaintext() {
        let config = ClientConfig::default()
            .with_server_address("localhost:8080")
            .with_user_agent("test-client/1.0.0")
            .with_insecure(true);

        let endpoint = config.endpoint().unwrap();
        assert_eq!(endpoint.uri().scheme_str(), Some("http"));
        assert_eq!(endpoint.uri().host(), Some("localhost"));
        assert_eq!(endpoint.uri().port_u16(), Some(8080));
    }

    #[test]
    fn test_endpoint_tls() {
        let endpoint = ClientConfig::default().endpoint().unwrap();
        assert_eq!(endpoint.uri().scheme_str(), Some("https"));
    }

    #[test]
    fn test_invalid_address() {
        let config = ClientConfig::default().with_server_address("not a uri");
        assert!(matches!(
            config.endpoint(),
            Err(TransportError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_invalid_user_agent() {
        let config = ClientConfig::default().with_user_agent("bad\nagent");
        assert!(matches!(
            config.endpoint(),
            Err(TransportError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"server_address": "custom.example.com:9090"}"#).unwrap();
        assert_eq!(config.server_address, "custom.example.com:9090");
        assert!(config.user_agent.starts_with("sendlix-rust-sdk/"));
        assert!(config.request_timeout.is_none());
    }
}
