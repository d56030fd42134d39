//! API key parsing.

use sendlix_core::CredentialError;
use std::fmt;
use std::str::FromStr;

const SEPARATOR: char = '.';

/// A parsed API key: the secret and the numeric key identifier.
///
/// Immutable once parsed. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    secret: String,
    key_id: i64,
}

impl Credential {
    /// Parse an API key of the form `"<secret>.<keyID>"`.
    ///
    /// # Errors
    /// - [`CredentialError::MalformedCredential`] unless there is exactly one `.`
    /// - [`CredentialError::EmptySecret`] if the part before the `.` is empty
    /// - [`CredentialError::InvalidKeyId`] if the part after it is not a base-10 `i64`
    pub fn parse(api_key: &str) -> Result<Self, CredentialError> {
        let mut parts = api_key.split(SEPARATOR);
        let (secret, key_id) = match (parts.next(), parts.next(), parts.next()) {
            (Some(secret), Some(key_id), None) => (secret, key_id),
            _ => return Err(CredentialError::MalformedCredential),
        };

        if secret.is_empty() {
            return Err(CredentialError::EmptySecret);
        }

        let key_id = key_id
            .parse::<i64>()
            .map_err(|source| CredentialError::InvalidKeyId {
                key_id: key_id.to_string(),
                source,
            })?;

        Ok(Self {
            secret: secret.to_string(),
            key_id,
        })
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn key_id(&self) -> i64 {
        self.key_id
    }
}

impl FromStr for Credential {
    type Err = CredentialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("secret", &"<redacted>")
            .field("key_id", &self.key_id)
            .finish()
    }
}
