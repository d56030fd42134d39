//! Client-layer error types for email and group operations.

use std::error::Error as _;
use thiserror::Error;

use super::{AuthError, TransportError};

/// Errors returned by [`EmailClient`](crate::EmailClient),
/// [`GroupClient`](crate::GroupClient) and [`BaseClient`](crate::BaseClient).
///
/// Validation variants are raised before any network or auth activity.
///
/// # Examples
///
/// ```no_run
/// use sendlix_client::error::ClientError;
///
/// fn report(error: ClientError) {
///     match error {
///         ClientError::MissingField(field) => eprintln!("missing {}", field),
///         ClientError::Rpc { operation, source } if source.is_retryable() => {
///             eprintln!("{} failed, retrying later: {}", operation, source);
///         }
///         e => eprintln!("Error: {}", e),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ClientError {
    /// A required field was empty
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("at least one recipient is required")]
    NoRecipients,

    #[error("either HTML or text content is required")]
    EmptyContent,

    #[error("at least one email is required")]
    NoEmails,

    /// An entry of a batch had an empty address
    #[error("email address is required for email at index {0}")]
    EmptyEmailAtIndex(usize),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The API call itself failed
    #[error("failed to {operation}: {source}")]
    Rpc {
        operation: &'static str,
        #[source]
        source: TransportError,
    },
}

impl ClientError {
    /// Classify the status of a failed call. A status raised by the auth
    /// layer carries the [`AuthError`] as its source and becomes
    /// [`ClientError::Auth`].
    pub(crate) fn rpc(operation: &'static str, status: tonic::Status) -> Self {
        let auth = status
            .source()
            .and_then(|source| source.downcast_ref::<AuthError>());
        match auth {
            Some(err) => ClientError::Auth(err.clone()),
            None => ClientError::Rpc {
                operation,
                source: status.into(),
            },
        }
    }

    /// True for validation failures detected before any request was sent
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ClientError::MissingField(_)
                | ClientError::NoRecipients
                | ClientError::EmptyContent
                | ClientError::NoEmails
                | ClientError::EmptyEmailAtIndex(_)
        )
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Transport(e) => e.is_retryable(),
            ClientError::Rpc { source, .. } => source.is_retryable(),
            ClientError::Auth(e) => e.is_transport(),
            _ => false,
        }
    }

    /// gRPC status code of a failed call, if there was one
    pub fn grpc_code(&self) -> Option<tonic::Code> {
        match self {
            ClientError::Transport(e) | ClientError::Rpc { source: e, .. } => e.grpc_code(),
            _ => None,
        }
    }
}
