//! Authentication flow tests
//!
//! These tests drive the public API end to end without a server: a scripted
//! token exchanger stands in for the `Auth` service and a `tower` service
//! stands in for the API channel.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sendlix::client::auth::{
    ApiKeyAuth, AuthError, AuthErrorKind, AuthLayer, AuthProvider, AuthState, CallContext,
    Credential, TokenExchanger,
};
use sendlix::proto::conversions::IssuedToken;
use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::{Layer, ServiceExt};

/// Issues `token-1`, `token-2`, ... each valid for one hour from `base`
struct SequentialExchanger {
    base: DateTime<Utc>,
    calls: AtomicUsize,
    fail: bool,
}

impl SequentialExchanger {
    fn new(base: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self {
            base,
            calls: AtomicUsize::new(0),
            fail: false,
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            base: Utc::now(),
            calls: AtomicUsize::new(0),
            fail: true,
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenExchanger for SequentialExchanger {
    async fn exchange(
        &self,
        credential: &Credential,
        _ctx: &CallContext,
    ) -> Result<IssuedToken, AuthError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail {
            return Err(AuthError::from_status(tonic::Status::unauthenticated(
                "unknown key",
            )));
        }
        Ok(IssuedToken {
            token: format!("token-{}-{}", credential.key_id(), n),
            expires_at: self.base + Duration::seconds(3600 * n as i64),
        })
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

#[tokio::test]
async fn test_api_key_scenario() {
    init_tracing();
    let now = Utc::now();
    let exchanger = SequentialExchanger::new(now);
    let credential: Credential = "abc123.456".parse().unwrap();
    let auth = ApiKeyAuth::with_exchanger(credential, exchanger.clone());
    let ctx = CallContext::new();

    let header = auth.auth_header(now, &ctx).await.unwrap();
    assert_eq!(header.key, "authorization");
    assert_eq!(header.value, "Bearer token-456-1");
    assert_eq!(exchanger.calls(), 1);

    let header = auth
        .auth_header(now + Duration::seconds(10), &ctx)
        .await
        .unwrap();
    assert_eq!(header.value, "Bearer token-456-1");
    assert_eq!(exchanger.calls(), 1);

    let header = auth
        .auth_header(now + Duration::seconds(3601), &ctx)
        .await
        .unwrap();
    assert_eq!(header.value, "Bearer token-456-2");
    assert_eq!(exchanger.calls(), 2);
}

#[tokio::test]
async fn test_requests_through_layer_share_one_token() {
    init_tracing();
    let exchanger = SequentialExchanger::new(Utc::now());
    let auth = Arc::new(ApiKeyAuth::with_exchanger(
        "abc123.456".parse().unwrap(),
        exchanger.clone(),
    ));

    let echo = tower::service_fn(|request: http::Request<()>| async move {
        Ok::<_, Infallible>(
            request
                .headers()
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
        )
    });
    let service = AuthLayer::new(auth.clone()).layer(echo);

    let responses = futures::future::join_all(
        (0..10).map(|_| service.clone().oneshot(http::Request::new(()))),
    )
    .await;

    for response in responses {
        assert_eq!(response.unwrap().as_deref(), Some("Bearer token-456-1"));
    }
    assert_eq!(exchanger.calls(), 1);
    assert_eq!(auth.state(), AuthState::HasToken);
}

#[tokio::test]
async fn test_rejected_key_fails_every_call() {
    init_tracing();
    let exchanger = SequentialExchanger::failing();
    let auth = Arc::new(ApiKeyAuth::with_exchanger(
        "abc123.456".parse().unwrap(),
        exchanger.clone(),
    ));
    let inner_calls = Arc::new(AtomicUsize::new(0));

    let counter = inner_calls.clone();
    let inner = tower::service_fn(move |_request: http::Request<()>| {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<_, Infallible>(())
        }
    });
    let service = AuthLayer::new(auth.clone()).layer(inner);

    for attempt in 1..=2 {
        let err = service
            .clone()
            .oneshot(http::Request::new(()))
            .await
            .unwrap_err();
        let status = err.downcast::<tonic::Status>().unwrap();
        assert_eq!(status.code(), tonic::Code::Unauthenticated);
        assert!(status.message().contains("unknown key"));
        // No failure caching: each call retries the exchange
        assert_eq!(exchanger.calls(), attempt);
    }
    assert_eq!(inner_calls.load(Ordering::SeqCst), 0);
    assert_eq!(auth.state(), AuthState::NoToken);

    let err = auth.auth_header(Utc::now(), &CallContext::new()).await.unwrap_err();
    assert_eq!(err.kind(), AuthErrorKind::Service);
    assert!(err.to_string().starts_with("failed to get auth header"));
}

#[tokio::test]
async fn test_cancelled_call_keeps_provider_usable() {
    init_tracing();
    let now = Utc::now();
    let exchanger = SequentialExchanger::new(now);
    let auth = ApiKeyAuth::with_exchanger("abc123.456".parse().unwrap(), exchanger.clone());

    let token = tokio_util::sync::CancellationToken::new();
    token.cancel();
    let cancelled = CallContext::new().with_cancellation(token);
    let err = auth.auth_header(now, &cancelled).await.unwrap_err();
    assert_eq!(err.kind(), AuthErrorKind::Cancelled);
    assert_eq!(exchanger.calls(), 0);

    let header = auth.auth_header(now, &CallContext::new()).await.unwrap();
    assert_eq!(header.value, "Bearer token-456-1");
}
