//! Credential-for-token exchange.

use async_trait::async_trait;
use sendlix_core::TransportError;
use sendlix_proto::auth::auth_client::AuthClient;
use sendlix_proto::auth::AuthRequest;
use sendlix_proto::conversions::IssuedToken;
use tonic::transport::Channel;
use tracing::debug;

use super::context::CallContext;
use super::credential::Credential;
use super::error::AuthError;
use crate::config::ClientConfig;

/// Performs one round trip trading a [`Credential`] for a token.
///
/// Implementations must not touch any cache; that is the provider's job.
#[async_trait]
pub trait TokenExchanger: Send + Sync {
    async fn exchange(
        &self,
        credential: &Credential,
        ctx: &CallContext,
    ) -> Result<IssuedToken, AuthError>;
}

/// Exchanges credentials over a dedicated gRPC channel to the `Auth` service.
///
/// The channel is created once, lazily: no handshake happens until the
/// first exchange, so connection failures only surface then. Clones of the
/// channel share one connection and may exchange concurrently.
#[derive(Debug, Clone)]
pub struct GrpcTokenExchanger {
    client: AuthClient<Channel>,
    uri: String,
}

impl GrpcTokenExchanger {
    /// Build the exchanger. Fails only on an invalid address or TLS setup.
    ///
    /// Must be called within a tokio runtime.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let channel = config.endpoint()?.connect_lazy();
        let uri = config.uri();
        debug!(%uri, "created lazy auth channel");
        Ok(Self::from_channel(channel, uri))
    }

    pub fn from_channel(channel: Channel, uri: impl Into<String>) -> Self {
        Self {
            client: AuthClient::new(channel),
            uri: uri.into(),
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }
}

#[async_trait]
impl TokenExchanger for GrpcTokenExchanger {
    async fn exchange(
        &self,
        credential: &Credential,
        ctx: &CallContext,
    ) -> Result<IssuedToken, AuthError> {
        let mut request =
            tonic::Request::new(AuthRequest::api_key(credential.secret(), credential.key_id()));
        if let Some(remaining) = ctx.remaining() {
            request.set_timeout(remaining);
        }

        let mut client = self.client.clone();
        let response = ctx
            .run(async move {
                client
                    .get_jwt_token(request)
                    .await
                    .map_err(AuthError::from_status)
            })
            .await?;

        IssuedToken::try_from(response.into_inner()).map_err(AuthError::malformed_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::error::AuthErrorKind;
    use std::time::Duration;

    fn unreachable_config() -> ClientConfig {
        // Port 1 on loopback refuses connections
        ClientConfig::default()
            .with_server_address("127.0.0.1:1")
            .with_insecure(true)
            .with_connect_timeout(Duration::from_secs(2))
    }

    #[tokio::test]
    async fn test_construction_is_lazy() {
        let exchanger = GrpcTokenExchanger::new(&unreachable_config()).unwrap();
        assert_eq!(exchanger.uri(), "http://127.0.0.1:1");
    }

    #[tokio::test]
    async fn test_invalid_address_fails_at_construction() {
        let config = ClientConfig::default().with_server_address("bad address");
        assert!(matches!(
            GrpcTokenExchanger::new(&config),
            Err(TransportError::InvalidEndpoint(_))
        ));
    }

    #[tokio::test]
    async fn test_connection_failure_surfaces_on_first_use() {
        let exchanger = GrpcTokenExchanger::new(&unreachable_config()).unwrap();
        let credential = Credential::parse("abc123.456").unwrap();

        let err = exchanger
            .exchange(&credential, &CallContext::new().with_timeout(Duration::from_secs(10)))
            .await
            .unwrap_err();
        assert!(err.is_transport(), "unexpected error: {err:?}");
    }

    #[tokio::test]
    async fn test_cancelled_context_aborts_before_network() {
        let exchanger = GrpcTokenExchanger::new(&unreachable_config()).unwrap();
        let credential = Credential::parse("abc123.456").unwrap();
        let ctx = CallContext::new();
        ctx.cancellation_token().cancel();

        let err = exchanger.exchange(&credential, &ctx).await.unwrap_err();
        assert_eq!(err.kind(), AuthErrorKind::Cancelled);
    }
}
