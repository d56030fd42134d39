//! Fixed bearer token authentication.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sendlix_core::CredentialError;
use tracing::debug;

use super::context::CallContext;
use super::error::AuthError;
use super::provider::{AuthHeader, AuthProvider};

/// Authenticates every call with a token obtained out of band.
///
/// The token is never refreshed; once it expires server-side, calls fail
/// with whatever status the API returns.
#[derive(Clone)]
pub struct StaticTokenAuth {
    token: String,
}

impl StaticTokenAuth {
    pub fn new(token: impl Into<String>) -> Result<Self, AuthError> {
        let token = token.into();
        if token.is_empty() {
            return Err(CredentialError::EmptyToken.into());
        }
        Ok(Self { token })
    }
}

impl std::fmt::Debug for StaticTokenAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenAuth")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl AuthProvider for StaticTokenAuth {
    async fn auth_header(
        &self,
        _now: DateTime<Utc>,
        _ctx: &CallContext,
    ) -> Result<AuthHeader, AuthError> {
        debug!("using static auth token");
        Ok(AuthHeader::bearer(&self.token))
    }
}
