//! # Sendlix - Rust SDK for the Sendlix email API
//!
//! This is a meta-crate that re-exports all Sendlix crates for convenient access.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sendlix = "0.1.0"
//! ```
//!
//! Then use the crates like this:
//!
//! ```rust,no_run
//! use sendlix::client::{ApiKeyAuth, EmailClient, GroupClient};
//! use sendlix::core::{EmailAddress, MailOptions};
//! ```
//!
//! ## Re-exported Crates
//!
//! - [`proto`] - Protocol messages and gRPC client stubs
//! - [`core`] - Shared types and errors
//! - [`client`] - Authentication and the email and group clients

pub use sendlix_client as client;
pub use sendlix_core as core;
pub use sendlix_proto as proto;
