//! Shared authenticated channel for the feature clients.

use std::time::Duration;
use tonic::transport::Channel;
use tower::Layer;
use tracing::debug;

use crate::auth::{AuthLayer, AuthService, BoxedAuthProvider};
use crate::config::ClientConfig;
use crate::error::ClientResult;

/// An authenticated, lazily connected channel to the Sendlix API.
///
/// Every request sent through [`BaseClient::channel`] carries the header
/// produced by the configured [`AuthProvider`](crate::auth::AuthProvider).
/// Cloning is cheap and clones share the underlying connection.
#[derive(Clone)]
pub struct BaseClient {
    channel: AuthService<Channel>,
    auth: BoxedAuthProvider,
    config: ClientConfig,
}

impl BaseClient {
    /// Create a client using `config`, or the defaults when `None`.
    ///
    /// No connection is attempted; this fails only on an invalid address or
    /// TLS setup. Must be called within a tokio runtime.
    pub fn new(auth: BoxedAuthProvider, config: Option<ClientConfig>) -> ClientResult<Self> {
        let config = config.unwrap_or_default();
        let channel = config.endpoint()?.connect_lazy();
        debug!(uri = %config.uri(), "created lazy API channel");
        Ok(Self::from_channel(channel, auth, config))
    }

    /// Wrap an existing channel
    pub fn from_channel(channel: Channel, auth: BoxedAuthProvider, config: ClientConfig) -> Self {
        Self {
            channel: AuthLayer::new(auth.clone()).layer(channel),
            auth,
            config,
        }
    }

    pub fn channel(&self) -> AuthService<Channel> {
        self.channel.clone()
    }

    pub fn auth(&self) -> &BoxedAuthProvider {
        &self.auth
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Bound every call made through this client, including any token
    /// exchange the call triggers.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = Some(timeout);
        self
    }

    /// Wrap `message` in a request carrying the configured deadline as
    /// `grpc-timeout`.
    pub fn request<T>(&self, message: T) -> tonic::Request<T> {
        let mut request = tonic::Request::new(message);
        if let Some(timeout) = self.config.request_timeout {
            request.set_timeout(timeout);
        }
        request
    }
}

impl std::fmt::Debug for BaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
