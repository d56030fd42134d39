//! Error types for the Sendlix clients.
//!
//! - [`TransportError`]: gRPC and network-level failures (re-exported from core)
//! - [`AuthError`]: credential parsing and token exchange failures
//! - [`ClientError`]: request validation and API operation failures
//!
//! # Error Hierarchy
//!
//! ```text
//! CredentialError / TransportError (core)
//!       ↓
//! AuthError (token exchange, header retrieval)
//!       ↓
//! ClientError (validation, email and group operations)
//! ```

mod client;

pub use crate::auth::AuthError;
pub use client::ClientError;
pub use sendlix_core::{CredentialError, TransportError};

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
