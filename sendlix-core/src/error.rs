//! Error types for the Sendlix client.
//!
//! This module defines the errors shared by every layer of the SDK:
//! malformed API keys detected at construction time, and transport
//! failures talking to the Sendlix API.

use std::num::ParseIntError;
use thiserror::Error;
use tonic::Code;

/// Errors produced while parsing an API key of the form `"<secret>.<keyID>"`.
///
/// These are construction-time failures and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// The key does not consist of exactly two `.`-separated parts
    #[error("invalid API key format. Expected format: 'secret.keyID'")]
    MalformedCredential,

    /// The part before the separator is empty
    #[error("invalid API key format. Secret cannot be empty")]
    EmptySecret,

    /// The part after the separator is not a base-10 `i64`
    #[error("invalid key ID {key_id:?}: {source}")]
    InvalidKeyId {
        key_id: String,
        #[source]
        source: ParseIntError,
    },

    /// A static bearer token was empty
    #[error("token cannot be empty")]
    EmptyToken,
}

/// Failures configuring the channel to the Sendlix API or completing a call
/// on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The configured server address or user agent is unusable
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("TLS setup failed: {0}")]
    Tls(String),

    /// A call finished with a non-OK gRPC status
    #[error("gRPC status {code:?}: {message}")]
    Status { code: Code, message: String },
}

impl From<tonic::Status> for TransportError {
    fn from(status: tonic::Status) -> Self {
        TransportError::Status {
            code: status.code(),
            message: status.message().to_string(),
        }
    }
}

impl TransportError {
    /// Transient failures: the same call may succeed later
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.grpc_code(),
            Some(
                Code::Unavailable
                    | Code::ResourceExhausted
                    | Code::Aborted
                    | Code::DeadlineExceeded
            )
        )
    }

    pub fn grpc_code(&self) -> Option<Code> {
        match self {
            TransportError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_conversion_preserves_code() {
        let status = tonic::Status::unavailable("connection refused");
        let err: TransportError = status.into();

        assert_eq!(err.grpc_code(), Some(Code::Unavailable));
        assert!(err.is_retryable());
        assert_eq!(err.to_string(), "gRPC status Unavailable: connection refused");
    }

    #[test]
    fn test_non_transient_status_is_not_retryable() {
        let err: TransportError = tonic::Status::unauthenticated("bad key").into();
        assert!(!err.is_retryable());

        let err = TransportError::InvalidEndpoint("::".to_string());
        assert!(!err.is_retryable());
        assert_eq!(err.grpc_code(), None);
    }

    #[test]
    fn test_configuration_errors_are_not_retryable() {
        let err = TransportError::Tls("no roots".to_string());
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "TLS setup failed: no roots");
    }

    #[test]
    fn test_invalid_key_id_message_names_input() {
        let source = "xyz".parse::<i64>().unwrap_err();
        let err = CredentialError::InvalidKeyId {
            key_id: "xyz".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid key ID \"xyz\""));
    }
}
