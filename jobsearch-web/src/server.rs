//! HTTP server for the job search API
//!
//! Wires configuration, the search service and the handlers into an axum
//! router, then serves it until Ctrl-C.

use std::net::SocketAddr;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::get;
use jobsearch_core::{CorsPolicy, ServiceConfig};
use jobsearch_search::{JobSearchError, JobSearchService};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::handlers::{api_search_jobs, health, root};

/// Shared state handed to every handler.
///
/// Holds nothing mutable; cloning is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Search service answering `/api/jobs`
    pub search_service: JobSearchService,
}

/// Server startup and runtime errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Listener could not be bound
    #[error("Failed to bind {address}: {source}")]
    Bind {
        /// Address that was requested
        address: SocketAddr,
        /// Underlying bind failure
        source: std::io::Error,
    },

    /// Server stopped with an I/O error
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),

    /// Search service could not be created
    #[error("Search service setup failed: {0}")]
    Search(#[from] JobSearchError),
}

/// Builds the application router with CORS and request tracing applied.
pub fn build_router(state: AppState, cors: &CorsPolicy) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/jobs", get(api_search_jobs))
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Translates the configured policy into a CORS layer.
///
/// An explicit origin list allows credentials; the allow-any policy does
/// not, since a wildcard origin cannot carry them.
fn cors_layer(policy: &CorsPolicy) -> CorsLayer {
    match policy {
        CorsPolicy::AllowAny => CorsLayer::permissive(),
        CorsPolicy::Origins(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!("Ignoring invalid CORS origin: {origin}");
                        None
                    }
                })
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true)
        }
    }
}

/// Starts the job search API and serves until Ctrl-C.
///
/// # Errors
/// - `ServerError::Search` - Search service could not be created
/// - `ServerError::Bind` - Listener could not bind the configured address
/// - `ServerError::Serve` - Server failed while running
pub async fn run_server(config: ServiceConfig) -> Result<(), ServerError> {
    let search_service = JobSearchService::from_config(&config.provider)?;
    info!(
        api_configured = search_service.is_configured(),
        cors = ?config.server.cors,
        "Job search service ready"
    );

    let app = build_router(AppState { search_service }, &config.server.cors);

    let address = config.server.bind_address;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|source| ServerError::Bind { address, source })?;

    info!("Job search API running on http://{address}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Job search API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
