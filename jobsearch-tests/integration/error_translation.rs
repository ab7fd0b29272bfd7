//! Integration tests for upstream failure translation
//!
//! Drives the full router with a real provider pointed at failing or
//! unreachable upstreams and checks the caller-facing status and detail.

use std::time::Duration;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use jobsearch_core::ServiceConfig;
use jobsearch_search::JobSearchService;
use jobsearch_web::{AppState, build_router};
use serde_json::Value;
use tower::ServiceExt;

use crate::fake_upstream::{Behavior, FakeUpstream, closed_port_url};

const SEARCH_URI: &str = "/api/jobs?role=Engineer&experience=Entry";

fn router_for(config: &ServiceConfig) -> Router {
    let search_service = JobSearchService::from_config(&config.provider).unwrap();
    build_router(AppState { search_service }, &config.server.cors)
}

async fn search(app: Router) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(SEARCH_URI).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_rate_limited_upstream_passes_status_through() {
    let upstream = FakeUpstream::start(Behavior::Status(429, "Too many requests")).await;

    let (status, body) = search(router_for(&upstream.config())).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["detail"], "Job search API error: Too many requests");
}

#[tokio::test]
async fn test_forbidden_upstream_passes_status_through() {
    let upstream = FakeUpstream::start(Behavior::Status(403, "{\"message\":\"denied\"}")).await;

    let (status, body) = search(router_for(&upstream.config())).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["detail"], "Job search API error: {\"message\":\"denied\"}");
}

#[tokio::test]
async fn test_redirect_is_passed_through_not_followed() {
    let target = FakeUpstream::start(Behavior::Records(1)).await;
    let location = target.base_url().join("search").unwrap().to_string();
    let upstream = FakeUpstream::start(Behavior::Redirect(location)).await;

    let (status, body) = search(router_for(&upstream.config())).await;

    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(body["detail"], "Job search API error: moved");
    assert_eq!(upstream.requests().len(), 1);
    assert!(target.requests().is_empty());
}

#[tokio::test]
async fn test_top_level_array_body_is_internal_error() {
    let upstream = FakeUpstream::start(Behavior::RawBody("[]")).await;

    let (status, body) = search(router_for(&upstream.config())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body["detail"]
            .as_str()
            .unwrap()
            .starts_with("Internal server error: ")
    );
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let upstream = FakeUpstream::start(Behavior::Delayed(Duration::from_secs(5))).await;
    let mut config = upstream.config();
    config.provider.request_timeout = Duration::from_millis(200);

    let (status, body) = search(router_for(&config)).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(
        body["detail"],
        "Job search request timed out. Please try again."
    );
}

#[tokio::test]
async fn test_unreachable_upstream_is_service_unavailable() {
    let config = ServiceConfig::default()
        .with_api_key("test-key")
        .with_base_url(closed_port_url());

    let (status, body) = search(router_for(&config)).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(
        body["detail"]
            .as_str()
            .unwrap()
            .starts_with("Failed to connect to job search service: ")
    );
}

#[tokio::test]
async fn test_malformed_body_is_internal_error() {
    let upstream = FakeUpstream::start(Behavior::RawBody("<html>not json</html>")).await;

    let (status, body) = search(router_for(&upstream.config())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body["detail"]
            .as_str()
            .unwrap()
            .starts_with("Internal server error: ")
    );
}

#[tokio::test]
async fn test_missing_credential_is_500_without_upstream_call() {
    let upstream = FakeUpstream::start(Behavior::Records(1)).await;
    let config = ServiceConfig::default().with_base_url(upstream.base_url());

    let (status, _) = search(router_for(&config)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(upstream.requests().is_empty());
}
