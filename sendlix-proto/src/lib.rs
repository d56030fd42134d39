//! Protocol definitions for the Sendlix API.
//!
//! This crate contains the protobuf messages and gRPC client stubs for the
//! `Auth`, `Email` and `Group` services, kept in the shape `tonic-build`
//! emits so they can be swapped for generated code without touching callers.

pub mod auth;
pub mod conversions;
pub mod email;
pub mod group;

pub use conversions::ConversionError;

/// Fully qualified protobuf package of every Sendlix service
pub const PACKAGE: &str = "sendlix.api.v1";
