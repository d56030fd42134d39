//! Authentication provider trait and types.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use super::context::CallContext;
use super::error::AuthError;

/// Metadata key carrying the credential on every outbound call
pub const AUTHORIZATION_HEADER: &str = "authorization";

/// A header pair ready to attach to a request. Never stored.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeader {
    pub key: &'static str,
    pub value: String,
}

impl AuthHeader {
    /// `authorization: Bearer <token>`
    pub fn bearer(token: &str) -> Self {
        Self {
            key: AUTHORIZATION_HEADER,
            value: format!("Bearer {}", token),
        }
    }
}

impl std::fmt::Debug for AuthHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthHeader")
            .field("key", &self.key)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// Trait for authentication providers
///
/// Implementations produce the header attached to every API call and
/// manage any caching or refresh internally.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Get the header to attach to a call made at `now`.
    ///
    /// Honours cancellation and the deadline carried by `ctx`.
    async fn auth_header(
        &self,
        now: DateTime<Utc>,
        ctx: &CallContext,
    ) -> Result<AuthHeader, AuthError>;
}

/// Type alias for shared auth provider
pub type BoxedAuthProvider = Arc<dyn AuthProvider>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header() {
        let header = AuthHeader::bearer("xyz");
        assert_eq!(header.key, "authorization");
        assert_eq!(header.value, "Bearer xyz");
        assert!(!format!("{header:?}").contains("xyz"));
    }
}
