//! Test harness driving the Axum router in-process.
//!
//! The router is built over in-memory collaborators and exercised with
//! `tower::ServiceExt::oneshot`; no socket or database is involved.

use axum::body::{to_bytes, Body};
use axum::http::{header::COOKIE, Request, StatusCode};
use axum::Router;
use marketplace_core::config::DiscoverySettings;
use marketplace_core::domains::providers::Provider;
use marketplace_core::kernel::{ServerDeps, TestDependencies};
use marketplace_core::server::build_app;
use serde_json::Value;
use tower::util::ServiceExt;

const BODY_LIMIT: usize = 1024 * 1024;

/// Initialize tracing once; respects RUST_LOG.
/// Run tests with: RUST_LOG=debug cargo test -- --nocapture
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct TestHarness {
    pub app: Router,
}

impl TestHarness {
    /// Router over an in-memory catalog with haversine distances.
    pub fn with_providers(providers: Vec<Provider>) -> Self {
        init_tracing();
        let deps = ServerDeps::in_memory(providers, DiscoverySettings::default());
        Self::from_deps(deps)
    }

    pub fn from_test_dependencies(deps: &TestDependencies) -> Self {
        init_tracing();
        Self::from_deps(deps.server_deps())
    }

    pub fn from_deps(deps: ServerDeps) -> Self {
        Self {
            app: build_app(deps, &["*".to_string()]),
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> (StatusCode, Value) {
        let request = Request::get(uri)
            .header(COOKIE, cookie)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }
}

/// Names of the providers in a search response, in order.
pub fn result_names(body: &Value) -> Vec<String> {
    body["results"]
        .as_array()
        .map(|results| {
            results
                .iter()
                .filter_map(|r| r["name"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
