//! JSearch (RapidAPI) provider for production use.

use async_trait::async_trait;
use jobsearch_core::ProviderConfig;
use reqwest::StatusCode;
use tracing::{debug, warn};
use url::Url;

use super::JobSearchProvider;
use crate::errors::JobSearchError;
use crate::upstream::{UpstreamQuery, UpstreamResponse};

const API_KEY_HEADER: &str = "X-RapidAPI-Key";
const API_HOST_HEADER: &str = "X-RapidAPI-Host";

/// JSearch provider reached over HTTPS with RapidAPI credentials.
///
/// The client carries the configured request timeout, so every call is
/// bounded end to end (connect, headers and body).
pub struct JSearchProvider {
    client: reqwest::Client,
    endpoint: Url,
    host: String,
    api_key: String,
}

impl std::fmt::Debug for JSearchProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JSearchProvider")
            .field("endpoint", &self.endpoint.as_str())
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}

impl JSearchProvider {
    /// Creates a provider from configuration and a credential.
    ///
    /// # Errors
    /// - `JobSearchError::Internal` - Endpoint URL or HTTP client cannot be built
    pub fn new(config: &ProviderConfig, api_key: impl Into<String>) -> Result<Self, JobSearchError> {
        let endpoint = config
            .base_url
            .join("search")
            .map_err(|e| JobSearchError::Internal {
                reason: format!("invalid provider endpoint: {e}"),
            })?;

        // Redirects are reported as upstream errors and never followed, so the
        // credential header only goes to the configured host.
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| JobSearchError::Internal {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint,
            host: config.host.clone(),
            api_key: api_key.into(),
        })
    }

    /// Full URL of the search endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl JobSearchProvider for JSearchProvider {
    async fn search(&self, query: &UpstreamQuery) -> Result<UpstreamResponse, JobSearchError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .header(API_HOST_HEADER, &self.host)
            .query(&query.params())
            .send()
            .await
            .map_err(|e| {
                warn!("JSearch request failed: {e}");
                JobSearchError::from_transport(&e)
            })?;

        let status = response.status();
        debug!(status = status.as_u16(), "JSearch responded");

        let body = response
            .text()
            .await
            .map_err(|e| JobSearchError::from_transport(&e))?;

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "JSearch returned an error status");
            return Err(JobSearchError::UpstreamError {
                status: status.as_u16(),
                body,
            });
        }

        UpstreamResponse::parse(&body).map_err(|e| JobSearchError::Internal {
            reason: format!("JSearch JSON parsing failed: {e}"),
        })
    }
}
