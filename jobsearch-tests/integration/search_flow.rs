//! Integration tests for the search path against a fake provider
//!
//! Exercises the real `JSearchProvider` over HTTP: request shape, result
//! truncation, ordering and field mapping.

use jobsearch_core::ServiceConfig;
use jobsearch_search::{JobSearchService, SearchRequest};

use crate::fake_upstream::{Behavior, FakeUpstream};

#[tokio::test]
async fn test_request_carries_credentials_and_parameters() {
    let upstream = FakeUpstream::start(Behavior::Records(2)).await;
    let service = JobSearchService::from_config(&upstream.config().provider).unwrap();

    service
        .search_jobs(&SearchRequest::new("Engineer", "3-5 years"))
        .await
        .unwrap();

    let requests = upstream.requests();
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    assert_eq!(request.headers["x-rapidapi-key"], "test-key");
    assert_eq!(request.headers["x-rapidapi-host"], "jsearch.p.rapidapi.com");
    assert_eq!(request.params["query"], "Senior Engineer");
    assert_eq!(request.params["page"], "1");
    assert_eq!(request.params["num_pages"], "1");
    assert_eq!(request.params["date_posted"], "all");
    assert!(!request.params.contains_key("location"));
}

#[tokio::test]
async fn test_location_parameter_sent_for_non_remote() {
    let upstream = FakeUpstream::start(Behavior::Records(0)).await;
    let service = JobSearchService::from_config(&upstream.config().provider).unwrap();

    service
        .search_jobs(
            &SearchRequest::new("Cook", "Entry")
                .with_location("New York, NY")
                .with_job_type("Part-time"),
        )
        .await
        .unwrap();

    let request = &upstream.requests()[0];
    assert_eq!(request.params["query"], "Junior Cook Part-time");
    assert_eq!(request.params["location"], "New York, NY");
}

#[tokio::test]
async fn test_results_truncated_and_mapped() {
    let upstream = FakeUpstream::start(Behavior::Records(25)).await;
    let service = JobSearchService::from_config(&upstream.config().provider).unwrap();

    let response = service
        .search_jobs(&SearchRequest::new("Engineer", "Unknown level"))
        .await
        .unwrap();

    assert_eq!(response.query, "Engineer");
    assert_eq!(response.total, 20);
    assert_eq!(response.jobs.len(), 20);
    assert_eq!(response.jobs[0].id, "upstream-0");
    assert_eq!(response.jobs[19].id, "upstream-19");

    // Odd records have no city and fall back to the country.
    assert_eq!(response.jobs[0].location.as_deref(), Some("Denver"));
    assert_eq!(response.jobs[1].location.as_deref(), Some("US"));
    assert_eq!(response.jobs[1].salary, None);
    assert_eq!(
        response.jobs[1].apply_url.as_deref(),
        Some("https://apply.example/1")
    );
}

#[tokio::test]
async fn test_unconfigured_service_never_calls_provider() {
    let upstream = FakeUpstream::start(Behavior::Records(3)).await;
    let config = ServiceConfig::default().with_base_url(upstream.base_url());
    let service = JobSearchService::from_config(&config.provider).unwrap();

    let result = service
        .search_jobs(&SearchRequest::new("Engineer", "Entry"))
        .await;

    assert!(result.is_err());
    assert!(upstream.requests().is_empty());
}
