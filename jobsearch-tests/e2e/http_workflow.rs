//! Full HTTP workflow: caller -> API -> fake provider -> caller

use std::net::SocketAddr;

use jobsearch_core::{CorsPolicy, ServiceConfig};
use jobsearch_search::JobSearchService;
use jobsearch_web::{AppState, ServerError, build_router, run_server};
use serde_json::Value;

use crate::fake_upstream::{Behavior, FakeUpstream};

async fn spawn_api(config: ServiceConfig) -> SocketAddr {
    let search_service = JobSearchService::from_config(&config.provider).unwrap();
    let app = build_router(AppState { search_service }, &config.server.cors);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    address
}

#[tokio::test]
async fn test_search_over_http() {
    let upstream = FakeUpstream::start(Behavior::Records(4)).await;
    let api = spawn_api(upstream.config()).await;

    let response = reqwest::Client::new()
        .get(format!("http://{api}/api/jobs"))
        .query(&[
            ("role", "Engineer"),
            ("experience", "5+ years"),
            ("location", "Remote"),
            ("jobType", "Contract"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["query"], "Lead OR Manager Engineer Contract");
    assert_eq!(body["total"], 4);
    assert_eq!(body["jobs"].as_array().unwrap().len(), 4);
    assert_eq!(body["jobs"][3]["company"], "Acme Corp");
}

#[tokio::test]
async fn test_health_over_http_with_cors_allow_list() {
    let upstream = FakeUpstream::start(Behavior::Records(0)).await;
    let mut config = upstream.config();
    config.server.cors = CorsPolicy::parse("https://jobs.example, https://admin.example");
    let api = spawn_api(config).await;

    let response = reqwest::Client::new()
        .get(format!("http://{api}/health"))
        .header("Origin", "https://admin.example")
        .send()
        .await
        .unwrap();

    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "https://admin.example"
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["api_configured"], true);
    assert!(upstream.requests().is_empty());
}

#[tokio::test]
async fn test_run_server_reports_bind_failure() {
    let occupied = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let mut config = ServiceConfig::default();
    config.server.bind_address = occupied.local_addr().unwrap();

    let result = run_server(config).await;

    assert!(matches!(result, Err(ServerError::Bind { .. })));
}
