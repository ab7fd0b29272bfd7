//! Job search service
//!
//! Turns a caller's [`SearchRequest`] into one upstream provider call and
//! reshapes the result into a [`SearchResponse`].

use std::sync::Arc;

use jobsearch_core::ProviderConfig;
use tracing::{info, warn};

use crate::errors::JobSearchError;
use crate::mapping::map_job;
use crate::providers::{JSearchProvider, JobSearchProvider};
use crate::query::build_search_query;
use crate::types::{SearchRequest, SearchResponse};
use crate::upstream::UpstreamQuery;

/// Job search service backed by a single upstream provider.
///
/// A service without a provider is "unconfigured": every search fails with
/// [`JobSearchError::ConfigurationMissing`] before anything goes on the wire.
#[derive(Debug, Clone)]
pub struct JobSearchService {
    provider: Option<Arc<dyn JobSearchProvider>>,
    max_results: usize,
}

impl JobSearchService {
    /// Creates the production service from provider configuration.
    ///
    /// Without a credential the service is created unconfigured rather than
    /// failing, so the process can still report its health.
    ///
    /// # Errors
    /// - `JobSearchError::Internal` - HTTP client could not be built
    pub fn from_config(config: &ProviderConfig) -> Result<Self, JobSearchError> {
        let provider = match config.api_key {
            Some(ref api_key) if config.is_configured() => {
                let provider = JSearchProvider::new(config, api_key.clone())?;
                Some(Arc::new(provider) as Arc<dyn JobSearchProvider>)
            }
            _ => {
                warn!("No provider credential configured, job searches will fail");
                None
            }
        };

        Ok(Self {
            provider,
            max_results: config.max_results,
        })
    }

    /// Creates a service around an arbitrary provider.
    pub fn with_provider(provider: Arc<dyn JobSearchProvider>, max_results: usize) -> Self {
        Self {
            provider: Some(provider),
            max_results,
        }
    }

    /// Creates a service with no provider.
    pub fn unconfigured() -> Self {
        Self {
            provider: None,
            max_results: 0,
        }
    }

    /// Whether a provider credential is available.
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Searches for jobs matching the request.
    ///
    /// Performs at most one upstream call. Records keep upstream order and
    /// are truncated to the configured maximum.
    ///
    /// # Errors
    /// - `JobSearchError::ConfigurationMissing` - No credential, nothing was sent
    /// - `JobSearchError::UpstreamError` - Provider returned a non-200 status
    /// - `JobSearchError::Timeout` - Provider did not answer in time
    /// - `JobSearchError::TransportFailure` - Provider could not be reached
    /// - `JobSearchError::Internal` - Response could not be processed
    pub async fn search_jobs(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse, JobSearchError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(JobSearchError::ConfigurationMissing)?;

        let search_query = build_search_query(&request.role, &request.experience, &request.job_type);
        let upstream_query = UpstreamQuery::first_page(search_query.as_str(), &request.location);

        info!(
            query = %search_query,
            location = ?upstream_query.location,
            "Searching jobs"
        );

        let response = provider.search(&upstream_query).await?;
        let received = response.data.len();

        let records = response
            .take_records(self.max_results)
            .map_err(|e| JobSearchError::Internal {
                reason: format!("malformed job record: {e}"),
            })?;
        let jobs: Vec<_> = records.into_iter().map(map_job).collect();

        info!(received, returned = jobs.len(), "Job search completed");

        Ok(SearchResponse::new(jobs, search_query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{COMPANY_PLACEHOLDER, TITLE_PLACEHOLDER};
    use crate::providers::MockProvider;
    use crate::upstream::UpstreamJob;

    fn service_with(provider: &Arc<MockProvider>) -> JobSearchService {
        JobSearchService::with_provider(provider.clone(), 20)
    }

    #[tokio::test]
    async fn test_unconfigured_service_makes_no_call() {
        let service = JobSearchService::unconfigured();
        let result = service
            .search_jobs(&SearchRequest::new("Engineer", "Entry"))
            .await;

        assert!(!service.is_configured());
        assert_eq!(result, Err(JobSearchError::ConfigurationMissing));
    }

    #[tokio::test]
    async fn test_from_config_without_key_is_unconfigured() {
        let service = JobSearchService::from_config(&ProviderConfig::default()).unwrap();
        assert!(!service.is_configured());
    }

    #[tokio::test]
    async fn test_from_config_with_empty_key_is_unconfigured() {
        let config = ProviderConfig {
            api_key: Some(String::new()),
            ..ProviderConfig::default()
        };
        let service = JobSearchService::from_config(&config).unwrap();
        assert!(!service.is_configured());
    }

    #[tokio::test]
    async fn test_query_is_echoed() {
        let provider = Arc::new(MockProvider::with_numbered_records(3));
        let response = service_with(&provider)
            .search_jobs(&SearchRequest::new("Engineer", "3-5 years"))
            .await
            .unwrap();

        assert_eq!(response.query, "Senior Engineer");
        assert_eq!(response.total, 3);
        assert_eq!(provider.call_count(), 1);
        assert_eq!(
            provider.last_query().unwrap().query,
            "Senior Engineer".to_string()
        );
    }

    #[tokio::test]
    async fn test_part_time_cook() {
        let provider = Arc::new(MockProvider::with_numbered_records(0));
        let response = service_with(&provider)
            .search_jobs(&SearchRequest::new("Cook", "Entry").with_job_type("Part-time"))
            .await
            .unwrap();

        assert_eq!(response.query, "Junior Cook Part-time");
        assert!(response.jobs.is_empty());
        assert_eq!(response.total, 0);
    }

    #[tokio::test]
    async fn test_results_truncated_to_twenty_in_order() {
        let provider = Arc::new(MockProvider::with_numbered_records(35));
        let response = service_with(&provider)
            .search_jobs(&SearchRequest::new("Engineer", "Entry"))
            .await
            .unwrap();

        assert_eq!(response.jobs.len(), 20);
        assert_eq!(response.total, 20);
        let ids: Vec<_> = response.jobs.iter().map(|job| job.id.as_str()).collect();
        let expected: Vec<_> = (0..20).map(|i| format!("job-{i}")).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn test_small_result_sets_are_complete() {
        for count in [0, 1, 7, 20] {
            let provider = Arc::new(MockProvider::with_numbered_records(count));
            let response = service_with(&provider)
                .search_jobs(&SearchRequest::new("Engineer", "Entry"))
                .await
                .unwrap();

            assert_eq!(response.total, count);
            assert_eq!(response.jobs.len(), count);
        }
    }

    #[tokio::test]
    async fn test_location_filter_forwarded() {
        let provider = Arc::new(MockProvider::with_numbered_records(1));
        let service = service_with(&provider);

        service
            .search_jobs(&SearchRequest::new("Engineer", "Entry").with_location("Lisbon"))
            .await
            .unwrap();
        assert_eq!(
            provider.last_query().unwrap().location.as_deref(),
            Some("Lisbon")
        );

        service
            .search_jobs(&SearchRequest::new("Engineer", "Entry").with_location("ReMoTe"))
            .await
            .unwrap();
        assert_eq!(provider.last_query().unwrap().location, None);
    }

    #[tokio::test]
    async fn test_placeholders_applied() {
        let provider = Arc::new(MockProvider::with_records(vec![UpstreamJob::default()]));
        let response = service_with(&provider)
            .search_jobs(&SearchRequest::new("Engineer", "Entry"))
            .await
            .unwrap();

        assert_eq!(response.jobs[0].title, TITLE_PLACEHOLDER);
        assert_eq!(response.jobs[0].company, COMPANY_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_records_past_cutoff_are_ignored() {
        let mut records: Vec<_> = (0..20)
            .map(|i| serde_json::json!({"job_id": format!("job-{i}"), "job_title": "Cook"}))
            .collect();
        records.push(serde_json::json!("garbage-beyond-cutoff"));
        let provider = Arc::new(MockProvider::with_raw_records(records));

        let response = service_with(&provider)
            .search_jobs(&SearchRequest::new("Cook", "Entry"))
            .await
            .unwrap();

        assert_eq!(response.total, 20);
        assert_eq!(response.jobs[19].id, "job-19");
    }

    #[tokio::test]
    async fn test_malformed_record_within_cutoff_is_internal_error() {
        let provider = Arc::new(MockProvider::with_raw_records(vec![
            serde_json::json!({"job_id": "ok"}),
            serde_json::json!(42),
        ]));

        let result = service_with(&provider)
            .search_jobs(&SearchRequest::new("Cook", "Entry"))
            .await;

        assert!(matches!(result, Err(JobSearchError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_provider_errors_propagate() {
        let provider = Arc::new(MockProvider::failing(JobSearchError::Timeout));
        let result = service_with(&provider)
            .search_jobs(&SearchRequest::new("Engineer", "Entry"))
            .await;

        assert_eq!(result, Err(JobSearchError::Timeout));
        assert_eq!(provider.call_count(), 1);
    }
}
