//! Authentication support for the Sendlix clients.
//!
//! An [`AuthProvider`] supplies the `authorization` header for every call.
//! [`ApiKeyAuth`] exchanges an API key for short-lived tokens and caches
//! them; [`StaticTokenAuth`] sends a fixed token. [`AuthLayer`] attaches the
//! header to requests on a channel.

mod api_key;
mod cache;
mod context;
mod credential;
mod error;
mod exchanger;
mod interceptor;
mod provider;
mod static_token;

pub use api_key::{ApiKeyAuth, AuthState};
pub use cache::{CachedToken, TokenCache};
pub use context::CallContext;
pub use credential::Credential;
pub use error::{AuthError, AuthErrorKind};
pub use exchanger::{GrpcTokenExchanger, TokenExchanger};
pub use interceptor::{AuthLayer, AuthService};
pub use provider::{AuthHeader, AuthProvider, BoxedAuthProvider, AUTHORIZATION_HEADER};
pub use static_token::StaticTokenAuth;
