//! Tower middleware attaching authentication headers to gRPC requests.

use chrono::Utc;
use http::HeaderValue;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tonic::Status;
use tower::{Layer, Service};
use tracing::debug;

use super::context::CallContext;
use super::error::AuthError;
use super::provider::BoxedAuthProvider;

type BoxError = Box<dyn std::error::Error + Send + Sync>;
type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// Layer wrapping a channel in an [`AuthService`]
#[derive(Clone)]
pub struct AuthLayer {
    provider: BoxedAuthProvider,
}

impl AuthLayer {
    pub fn new(provider: BoxedAuthProvider) -> Self {
        Self { provider }
    }
}

impl std::fmt::Debug for AuthLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthLayer").finish_non_exhaustive()
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthService::new(inner, self.provider.clone())
    }
}

/// Service that obtains a header from an [`AuthProvider`] before every call.
///
/// Unlike a `tonic` interceptor this runs asynchronously, so a token
/// exchange never blocks a runtime thread, and dropping the call future
/// aborts it. When the provider fails the call fails with the mapped
/// [`Status`] and the inner service is not invoked.
///
/// [`AuthProvider`]: super::provider::AuthProvider
#[derive(Clone)]
pub struct AuthService<S> {
    inner: S,
    provider: BoxedAuthProvider,
}

impl<S> AuthService<S> {
    pub fn new(inner: S, provider: BoxedAuthProvider) -> Self {
        Self { inner, provider }
    }

    pub fn provider(&self) -> &BoxedAuthProvider {
        &self.provider
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for AuthService<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<S, B> Service<http::Request<B>> for AuthService<S>
where
    S: Service<http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Into<BoxError>,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = BoxError;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(Into::into)
    }

    fn call(&mut self, mut request: http::Request<B>) -> Self::Future {
        // The ready inner service moves into the future; a fresh clone
        // stays behind for the next poll_ready.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let provider = self.provider.clone();

        Box::pin(async move {
            let ctx = CallContext::from_headers(request.headers());
            let header = provider
                .auth_header(Utc::now(), &ctx)
                .await
                .map_err(auth_failure)?;

            let value = HeaderValue::from_str(&header.value)
                .map_err(|_| Box::new(Status::internal("invalid auth header value")) as BoxError)?;
            request.headers_mut().insert(header.key, value);
            debug!(path = %request.uri().path(), "attached auth header");

            let response = inner.call(request).await.map_err(Into::<BoxError>::into)?;
            Ok::<_, BoxError>(response)
        })
    }
}

/// The status returned for a failed header lookup, carrying the
/// [`AuthError`] as its source so callers can recover it.
fn auth_failure(err: AuthError) -> BoxError {
    let mut status = err.to_status();
    status.set_source(Arc::new(err));
    Box::new(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::error::AuthErrorKind;
    use crate::auth::provider::{AuthHeader, AuthProvider};
    use crate::auth::static_token::StaticTokenAuth;
    use async_trait::async_trait;
    use chrono::DateTime;
    use std::convert::Infallible;
    use std::error::Error as _;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::util::BoxCloneService;
    use tower::ServiceExt;

    struct FailingProvider;

    #[async_trait]
    impl AuthProvider for FailingProvider {
        async fn auth_header(
            &self,
            _now: DateTime<Utc>,
            _ctx: &CallContext,
        ) -> Result<AuthHeader, AuthError> {
            Err(AuthError::header_retrieval(AuthError::from_status(
                Status::unauthenticated("invalid api key"),
            )))
        }
    }

    /// Records whether the request carried a deadline
    struct DeadlineProbe {
        saw_deadline: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl AuthProvider for DeadlineProbe {
        async fn auth_header(
            &self,
            _now: DateTime<Utc>,
            ctx: &CallContext,
        ) -> Result<AuthHeader, AuthError> {
            if ctx.deadline().is_some() {
                self.saw_deadline.fetch_add(1, Ordering::SeqCst);
            }
            Ok(AuthHeader::bearer("T"))
        }
    }

    fn echo_authorization(
        calls: Arc<AtomicUsize>,
    ) -> BoxCloneService<http::Request<()>, Option<HeaderValue>, Infallible> {
        BoxCloneService::new(tower::service_fn(move |request: http::Request<()>| {
            let calls = calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, Infallible>(request.headers().get("authorization").cloned())
            }
        }))
    }

    #[tokio::test]
    async fn test_attaches_bearer_header() {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider: BoxedAuthProvider = Arc::new(StaticTokenAuth::new("xyz").unwrap());
        let service = AuthLayer::new(provider).layer(echo_authorization(calls.clone()));

        let header = service.oneshot(http::Request::new(())).await.unwrap();
        assert_eq!(header.unwrap(), "Bearer xyz");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_skips_inner_service() {
        let calls = Arc::new(AtomicUsize::new(0));
        let service = AuthService::new(echo_authorization(calls.clone()), Arc::new(FailingProvider));

        let err = service
            .oneshot(http::Request::new(()))
            .await
            .unwrap_err();
        let status = err.downcast::<Status>().unwrap();
        assert_eq!(status.code(), tonic::Code::Unauthenticated);
        assert!(status.message().starts_with("failed to get auth header"));
        assert!(status.message().contains("invalid api key"));
        let source = status
            .source()
            .and_then(|e| e.downcast_ref::<AuthError>())
            .unwrap();
        assert_eq!(source.kind(), AuthErrorKind::Service);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_grpc_timeout_becomes_deadline() {
        let saw_deadline = Arc::new(AtomicUsize::new(0));
        let provider = Arc::new(DeadlineProbe {
            saw_deadline: saw_deadline.clone(),
        });
        let mut service = AuthService::new(
            echo_authorization(Arc::new(AtomicUsize::new(0))),
            provider,
        );

        let request = http::Request::builder()
            .header("grpc-timeout", "5S")
            .body(())
            .unwrap();
        service.ready().await.unwrap().call(request).await.unwrap();
        assert_eq!(saw_deadline.load(Ordering::SeqCst), 1);

        service
            .ready()
            .await
            .unwrap()
            .call(http::Request::new(()))
            .await
            .unwrap();
        assert_eq!(saw_deadline.load(Ordering::SeqCst), 1);
    }
}
