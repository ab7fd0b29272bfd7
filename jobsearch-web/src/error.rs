//! Translation of search failures into HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jobsearch_search::JobSearchError;
use serde_json::json;
use tracing::{error, warn};

/// Errors surfaced by API handlers.
///
/// Rendered as `{"detail": "<message>"}` with the status of the underlying
/// failure.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Search failed; status follows the search error
    #[error(transparent)]
    Search(#[from] JobSearchError),

    /// Query parameters were missing or malformed
    #[error("Invalid request: {reason}")]
    InvalidRequest {
        /// What was wrong with the request
        reason: String,
    },
}

impl ApiError {
    /// Status code sent to the caller.
    ///
    /// Upstream status codes that are not valid HTTP codes become 502.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Search(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::InvalidRequest { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.to_string();

        if status.is_server_error() {
            error!(status = status.as_u16(), "{detail}");
        } else {
            warn!(status = status.as_u16(), "{detail}");
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
