//! Mock provider implementation for testing.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use super::JobSearchProvider;
use crate::errors::JobSearchError;
use crate::upstream::{UpstreamJob, UpstreamQuery, UpstreamResponse};

/// Mock provider returning a canned outcome and recording every call.
#[derive(Debug)]
pub struct MockProvider {
    outcome: Result<UpstreamResponse, JobSearchError>,
    calls: AtomicUsize,
    last_query: Mutex<Option<UpstreamQuery>>,
}

impl MockProvider {
    /// Provider answering every search with the given records.
    ///
    /// # Panics
    /// Panics if a record cannot be serialized, which a plain `UpstreamJob` never fails.
    pub fn with_records(records: Vec<UpstreamJob>) -> Self {
        let data = records
            .iter()
            .map(|record| serde_json::to_value(record).expect("job record serializes"))
            .collect();
        Self::with_raw_records(data)
    }

    /// Provider answering every search with raw JSON records.
    pub fn with_raw_records(data: Vec<Value>) -> Self {
        Self::with_outcome(Ok(UpstreamResponse { data }))
    }

    /// Provider answering every search with `count` numbered records.
    pub fn with_numbered_records(count: usize) -> Self {
        let records = (0..count)
            .map(|index| UpstreamJob {
                job_id: Some(format!("job-{index}")),
                job_title: Some(format!("Position {index}")),
                employer_name: Some("Mock Employer".to_string()),
                job_city: Some("Mock City".to_string()),
                ..UpstreamJob::default()
            })
            .collect();
        Self::with_records(records)
    }

    /// Provider failing every search with the given error.
    pub fn failing(error: JobSearchError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<UpstreamResponse, JobSearchError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    /// Number of searches received so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Parameters of the most recent search, if any.
    ///
    /// # Panics
    /// Panics if a previous holder of the internal lock panicked.
    pub fn last_query(&self) -> Option<UpstreamQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobSearchProvider for MockProvider {
    async fn search(&self, query: &UpstreamQuery) -> Result<UpstreamResponse, JobSearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.clone());
        self.outcome.clone()
    }
}
