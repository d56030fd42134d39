//! Core types and utilities for the Sendlix client.
//!
//! This crate provides the foundational types and error handling
//! shared by the protocol bindings and the API clients.

pub mod error;
pub mod types;

pub use error::*;
pub use types::*;
