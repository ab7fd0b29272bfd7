//! Service identification and health handlers

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::server::AppState;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "job-search-api";

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    /// Service identification message
    pub message: &'static str,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// Always "healthy" while the process answers
    pub status: &'static str,
    /// Service name
    pub service: &'static str,
    /// Whether a provider credential is present
    pub api_configured: bool,
}

/// `GET /`
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Income Recovery API - Job Search Service",
    })
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: SERVICE_NAME,
        api_configured: state.search_service.is_configured(),
    })
}
