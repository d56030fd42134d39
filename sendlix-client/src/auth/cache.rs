//! In-memory token cache.

use chrono::{DateTime, Utc};
use std::fmt;

/// A bearer token and the instant it stops being usable
#[derive(Clone, PartialEq, Eq)]
pub struct CachedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl CachedToken {
    pub fn new(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    /// Check if the token is still usable at `now`
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

impl fmt::Debug for CachedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedToken")
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Holds zero or one [`CachedToken`].
///
/// Holds no lock of its own; callers synchronize access.
#[derive(Debug, Clone, Default)]
pub struct TokenCache {
    entry: Option<CachedToken>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff a token is present and `now` is strictly before its expiry
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        self.entry.as_ref().is_some_and(|t| t.is_valid_at(now))
    }

    /// The cached entry, whether or not it has expired
    pub fn get(&self) -> Option<&CachedToken> {
        self.entry.as_ref()
    }

    /// Overwrite any existing entry
    pub fn replace(&mut self, token: impl Into<String>, expires_at: DateTime<Utc>) {
        self.entry = Some(CachedToken::new(token, expires_at));
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}
