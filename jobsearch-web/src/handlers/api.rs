//! API handlers for job search

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Json;
use jobsearch_search::types::{DEFAULT_JOB_TYPE, DEFAULT_LOCATION};
use jobsearch_search::{SearchRequest, SearchResponse};
use serde::Deserialize;

use crate::error::ApiError;
use crate::server::AppState;

/// Query string of `GET /api/jobs`.
#[derive(Debug, Deserialize)]
pub struct JobSearchQuery {
    /// Job role or title
    pub role: String,
    /// Experience level label
    pub experience: String,
    /// Location filter, "Remote" when omitted
    #[serde(default = "default_location")]
    pub location: String,
    /// Employment type, sent as `jobType`
    #[serde(default = "default_job_type", rename = "jobType")]
    pub job_type: String,
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

fn default_job_type() -> String {
    DEFAULT_JOB_TYPE.to_string()
}

impl From<JobSearchQuery> for SearchRequest {
    fn from(query: JobSearchQuery) -> Self {
        SearchRequest {
            role: query.role,
            experience: query.experience,
            location: query.location,
            job_type: query.job_type,
        }
    }
}

/// `GET /api/jobs?role=&experience=&location=&jobType=`
///
/// # Errors
/// - `ApiError::InvalidRequest` - Required parameters are missing (422)
/// - `ApiError::Search` - Search failed, status per the error taxonomy
pub async fn api_search_jobs(
    State(state): State<AppState>,
    params: Result<Query<JobSearchQuery>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(params) = params.map_err(|rejection| ApiError::InvalidRequest {
        reason: rejection.body_text(),
    })?;

    let request = SearchRequest::from(params);
    let response = state.search_service.search_jobs(&request).await?;

    Ok(Json(response))
}
