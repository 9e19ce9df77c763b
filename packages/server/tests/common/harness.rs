//! Test harness wiring actions and the router to a spy repository.
//!
//! Every harness owns a fresh store, so tests never share state.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fruits_core::domains::fruits::Fruit;
use fruits_core::kernel::test_dependencies::SpyFruitRepository;
use fruits_core::kernel::ServerDeps;
use fruits_core::server::{build_app, AppOptions};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Initialize tracing subscriber to respect RUST_LOG environment variable.
/// Uses try_init() to avoid panicking if already initialized.
/// Run tests with: RUST_LOG=debug cargo test -- --nocapture
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct TestHarness {
    pub deps: ServerDeps,
    pub spy: Arc<SpyFruitRepository>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_spy(SpyFruitRepository::new())
    }

    /// Harness whose repository rejects every save
    pub fn failing_saves(message: &str) -> Self {
        Self::with_spy(SpyFruitRepository::new().failing_saves(message))
    }

    fn with_spy(spy: SpyFruitRepository) -> Self {
        init_tracing();
        let (deps, spy) = ServerDeps::with_spy(spy);
        Self { deps, spy }
    }

    /// Seed fruits directly into the store (not recorded as calls)
    pub async fn with_fruits(self, fruits: &[Fruit]) -> Self {
        self.spy.seed(fruits).await;
        self
    }

    pub fn app(&self) -> Router {
        build_app(self.deps.clone(), AppOptions::default())
    }

    /// Send one request through a router sharing this harness's store
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .app()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body collects")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body is JSON")
        };

        (status, body)
    }
}

/// Build a request with an optional JSON body and optional `x-owner` header
pub fn request(method: &str, uri: &str, body: Option<Value>, owner: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(owner) = owner {
        builder = builder.header("x-owner", owner);
    }

    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    builder.body(body).expect("request is well formed")
}

/// Request with a raw, possibly malformed, JSON body
pub fn raw_json_request(method: &str, uri: &str, raw: &str, owner: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    if let Some(owner) = owner {
        builder = builder.header("x-owner", owner);
    }

    builder
        .body(Body::from(raw.to_string()))
        .expect("request is well formed")
}
