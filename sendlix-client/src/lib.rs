//! Authenticated gRPC clients for the Sendlix email API.
//!
//! This crate provides API key authentication with cached, lazily refreshed
//! bearer tokens, and the [`EmailClient`] and [`GroupClient`] built on a
//! shared authenticated channel.

pub mod auth;
pub mod base;
pub mod config;
pub mod email;
pub mod error;
pub mod group;

pub use auth::{ApiKeyAuth, AuthProvider, StaticTokenAuth};
pub use base::BaseClient;
pub use config::ClientConfig;
pub use email::EmailClient;
pub use error::{ClientError, ClientResult};
pub use group::GroupClient;
