//! API key authentication provider.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::cache::TokenCache;
use super::context::CallContext;
use super::credential::Credential;
use super::error::AuthError;
use super::exchanger::{GrpcTokenExchanger, TokenExchanger};
use super::provider::{AuthHeader, AuthProvider};
use crate::config::ClientConfig;

/// Observable state of an [`ApiKeyAuth`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// No exchange has succeeded yet
    NoToken,
    /// A token has been obtained; it may since have expired
    HasToken,
}

/// Authenticates with an API key, exchanging it for short-lived bearer
/// tokens and caching the most recent one.
///
/// Refresh is lazy: an expired token is replaced on the next call that
/// needs it. Concurrent calls that miss the cache wait for a single
/// exchange instead of each starting their own.
pub struct ApiKeyAuth {
    credential: Credential,
    exchanger: Arc<dyn TokenExchanger>,
    /// Cached token (fast path, never held across an await)
    cache: RwLock<TokenCache>,
    /// Serializes refreshes
    refresh: tokio::sync::Mutex<()>,
}

impl ApiKeyAuth {
    /// Create a provider for `api_key` against the default endpoint.
    ///
    /// # Errors
    /// Returns [`AuthError::Credential`] if the key is malformed. No network
    /// activity happens here.
    pub fn new(api_key: &str) -> Result<Self, AuthError> {
        Self::with_config(api_key, &ClientConfig::default())
    }

    /// Create a provider whose exchange channel uses `config`
    pub fn with_config(api_key: &str, config: &ClientConfig) -> Result<Self, AuthError> {
        let credential = Credential::parse(api_key)?;
        let exchanger = GrpcTokenExchanger::new(config)?;
        Ok(Self::with_exchanger(credential, Arc::new(exchanger)))
    }

    /// Create a provider around any exchanger
    pub fn with_exchanger(credential: Credential, exchanger: Arc<dyn TokenExchanger>) -> Self {
        Self {
            credential,
            exchanger,
            cache: RwLock::new(TokenCache::new()),
            refresh: tokio::sync::Mutex::new(()),
        }
    }

    pub fn key_id(&self) -> i64 {
        self.credential.key_id()
    }

    pub fn state(&self) -> AuthState {
        if self.cache.read().is_empty() {
            AuthState::NoToken
        } else {
            AuthState::HasToken
        }
    }

    /// Expiry of the cached token, if any
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.cache.read().get().map(|t| t.expires_at)
    }

    fn cached_header(&self, now: DateTime<Utc>) -> Option<AuthHeader> {
        let cache = self.cache.read();
        if cache.is_valid(now) {
            cache.get().map(|t| AuthHeader::bearer(&t.token))
        } else {
            None
        }
    }

    async fn refresh_header(
        &self,
        now: DateTime<Utc>,
        ctx: &CallContext,
    ) -> Result<AuthHeader, AuthError> {
        let _guard = ctx
            .run(async { Ok(self.refresh.lock().await) })
            .await?;

        // Another caller may have refreshed while we waited
        if let Some(header) = self.cached_header(now) {
            debug!(key_id = self.key_id(), "token refreshed by concurrent call");
            return Ok(header);
        }

        match self.exchanger.exchange(&self.credential, ctx).await {
            Ok(issued) => {
                info!(
                    key_id = self.key_id(),
                    expires_at = %issued.expires_at,
                    "obtained new auth token"
                );
                let header = AuthHeader::bearer(&issued.token);
                self.cache.write().replace(issued.token, issued.expires_at);
                Ok(header)
            }
            Err(err) => {
                warn!(key_id = self.key_id(), error = %err, "token exchange failed");
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for ApiKeyAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyAuth")
            .field("key_id", &self.key_id())
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl AuthProvider for ApiKeyAuth {
    async fn auth_header(
        &self,
        now: DateTime<Utc>,
        ctx: &CallContext,
    ) -> Result<AuthHeader, AuthError> {
        if let Some(header) = self.cached_header(now) {
            debug!(key_id = self.key_id(), "using cached auth token");
            return Ok(header);
        }

        self.refresh_header(now, ctx)
            .await
            .map_err(AuthError::header_retrieval)
    }
}
