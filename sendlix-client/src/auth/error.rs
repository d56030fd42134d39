//! Authentication error types.

use sendlix_core::{CredentialError, TransportError};
use thiserror::Error;
use tonic::{Code, Status};

/// Errors raised while building an auth provider or obtaining a header.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The API key could not be parsed
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// The authentication endpoint could not be reached
    #[error("auth transport error: {0}")]
    Transport(#[from] TransportError),

    /// The authentication endpoint rejected the credential or answered
    /// with an incomplete response
    #[error("auth service error: {message}")]
    Service { code: Option<Code>, message: String },

    /// The caller cancelled the request
    #[error("token exchange cancelled")]
    Cancelled,

    /// The caller's deadline passed before the exchange finished
    #[error("token exchange deadline exceeded")]
    DeadlineExceeded,

    /// A failure while producing an auth header for an outbound call
    #[error("failed to get auth header: {source}")]
    HeaderRetrieval {
        #[source]
        source: Box<AuthError>,
    },
}

/// Root classification of an [`AuthError`], looking through wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    MalformedCredential,
    EmptySecret,
    InvalidKeyId,
    EmptyToken,
    Transport,
    Service,
    Cancelled,
    DeadlineExceeded,
}

impl AuthError {
    pub(crate) fn header_retrieval(source: AuthError) -> Self {
        AuthError::HeaderRetrieval {
            source: Box::new(source),
        }
    }

    pub(crate) fn malformed_response(detail: impl std::fmt::Display) -> Self {
        AuthError::Service {
            code: None,
            message: format!("malformed auth response: {}", detail),
        }
    }

    /// Classify a gRPC status returned by the authentication endpoint
    pub fn from_status(status: Status) -> Self {
        match status.code() {
            Code::Cancelled => AuthError::Cancelled,
            Code::DeadlineExceeded => AuthError::DeadlineExceeded,
            Code::Unavailable
            | Code::Unknown
            | Code::Internal
            | Code::ResourceExhausted
            | Code::Aborted
            | Code::DataLoss => AuthError::Transport(status.into()),
            code => AuthError::Service {
                code: Some(code),
                message: status.message().to_string(),
            },
        }
    }

    pub fn kind(&self) -> AuthErrorKind {
        match self {
            AuthError::Credential(CredentialError::MalformedCredential) => {
                AuthErrorKind::MalformedCredential
            }
            AuthError::Credential(CredentialError::EmptySecret) => AuthErrorKind::EmptySecret,
            AuthError::Credential(CredentialError::InvalidKeyId { .. }) => {
                AuthErrorKind::InvalidKeyId
            }
            AuthError::Credential(CredentialError::EmptyToken) => AuthErrorKind::EmptyToken,
            AuthError::Transport(_) => AuthErrorKind::Transport,
            AuthError::Service { .. } => AuthErrorKind::Service,
            AuthError::Cancelled => AuthErrorKind::Cancelled,
            AuthError::DeadlineExceeded => AuthErrorKind::DeadlineExceeded,
            AuthError::HeaderRetrieval { source } => source.kind(),
        }
    }

    /// Transport-class failures: the caller may retry the whole operation
    pub fn is_transport(&self) -> bool {
        matches!(
            self.kind(),
            AuthErrorKind::Transport | AuthErrorKind::Cancelled | AuthErrorKind::DeadlineExceeded
        )
    }

    /// gRPC status surfaced to the caller of an intercepted call
    pub fn to_status(&self) -> Status {
        let code = match self.root() {
            AuthError::Credential(_) => Code::InvalidArgument,
            AuthError::Transport(e) => e.grpc_code().unwrap_or(Code::Unavailable),
            // No code means the endpoint answered with an unusable response
            AuthError::Service { code, .. } => code.unwrap_or(Code::Internal),
            AuthError::Cancelled => Code::Cancelled,
            AuthError::DeadlineExceeded => Code::DeadlineExceeded,
            AuthError::HeaderRetrieval { .. } => Code::Unknown,
        };
        Status::new(code, self.to_string())
    }

    fn root(&self) -> &AuthError {
        match self {
            AuthError::HeaderRetrieval { source } => source.root(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(
            AuthError::from_status(Status::unavailable("down")).kind(),
            AuthErrorKind::Transport
        );
        assert_eq!(
            AuthError::from_status(Status::unauthenticated("bad key")).kind(),
            AuthErrorKind::Service
        );
        assert_eq!(
            AuthError::from_status(Status::permission_denied("revoked")).kind(),
            AuthErrorKind::Service
        );
        assert_eq!(
            AuthError::from_status(Status::cancelled("")).kind(),
            AuthErrorKind::Cancelled
        );
        assert_eq!(
            AuthError::from_status(Status::deadline_exceeded("")).kind(),
            AuthErrorKind::DeadlineExceeded
        );
    }

    #[test]
    fn test_kind_looks_through_wrapper() {
        let err = AuthError::header_retrieval(AuthError::from_status(Status::unauthenticated(
            "invalid secret",
        )));
        assert_eq!(err.kind(), AuthErrorKind::Service);
        assert!(!err.is_transport());
        assert_eq!(
            err.to_string(),
            "failed to get auth header: auth service error: invalid secret"
        );
    }

    #[test]
    fn test_to_status_preserves_transport_code() {
        let err = AuthError::header_retrieval(AuthError::from_status(Status::resource_exhausted(
            "slow down",
        )));
        let status = err.to_status();
        assert_eq!(status.code(), Code::ResourceExhausted);
        assert!(status.message().starts_with("failed to get auth header"));
        assert!(err.is_transport());
    }

    #[test]
    fn test_to_status_keeps_service_code() {
        let err = AuthError::header_retrieval(AuthError::from_status(Status::permission_denied(
            "key revoked",
        )));
        assert_eq!(err.to_status().code(), Code::PermissionDenied);

        let err = AuthError::header_retrieval(AuthError::from_status(Status::unauthenticated(
            "bad key",
        )));
        assert_eq!(err.to_status().code(), Code::Unauthenticated);

        let err = AuthError::malformed_response("missing expiry");
        let status = err.to_status();
        assert_eq!(status.code(), Code::Internal);
        assert!(status.message().contains("malformed auth response"));
    }

    #[test]
    fn test_to_status_for_cancellation() {
        let err = AuthError::header_retrieval(AuthError::Cancelled);
        assert_eq!(err.to_status().code(), Code::Cancelled);
        let err = AuthError::header_retrieval(AuthError::DeadlineExceeded);
        assert_eq!(err.to_status().code(), Code::DeadlineExceeded);
    }
}
