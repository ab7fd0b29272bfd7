//! Data types for job search requests and responses.

use serde::{Deserialize, Serialize};

/// Location used when the caller does not name one.
pub const DEFAULT_LOCATION: &str = "Remote";
/// Job type used when the caller does not name one.
pub const DEFAULT_JOB_TYPE: &str = "Full-time";

/// Normalized search request as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Job role or title to search for
    pub role: String,
    /// Experience level label ("Entry", "1-3 years", ...)
    pub experience: String,
    /// Location filter, "Remote" disables location filtering
    pub location: String,
    /// Employment type, "Full-time" adds nothing to the query
    pub job_type: String,
}

impl SearchRequest {
    /// Creates a request with the default location and job type.
    pub fn new(role: impl Into<String>, experience: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            experience: experience.into(),
            location: DEFAULT_LOCATION.to_string(),
            job_type: DEFAULT_JOB_TYPE.to_string(),
        }
    }

    /// Sets the location filter.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the employment type.
    pub fn with_job_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type = job_type.into();
        self
    }
}

/// Simplified job record returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Provider job identifier, may be empty
    pub id: String,
    /// Job title or placeholder
    pub title: String,
    /// Employer name or placeholder
    pub company: String,
    /// City, country, or placeholder
    pub location: Option<String>,
    /// Salary text when the provider sends one
    pub salary: Option<String>,
    /// Apply link, Google link, or empty
    pub apply_url: Option<String>,
}

/// Result of one search: mapped jobs, their count, and the query used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Mapped jobs in provider order
    pub jobs: Vec<Job>,
    /// Number of entries in `jobs`
    pub total: usize,
    /// Search string sent to the provider
    pub query: String,
}

impl SearchResponse {
    /// Builds a response whose total always matches the job count.
    pub fn new(jobs: Vec<Job>, query: impl Into<String>) -> Self {
        Self {
            total: jobs.len(),
            jobs,
            query: query.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = SearchRequest::new("Engineer", "Entry");

        assert_eq!(request.location, "Remote");
        assert_eq!(request.job_type, "Full-time");
    }

    #[test]
    fn test_response_total_matches_jobs() {
        let job = Job {
            id: "1".to_string(),
            title: "Cook".to_string(),
            company: "Diner".to_string(),
            location: Some("Austin".to_string()),
            salary: None,
            apply_url: Some(String::new()),
        };
        let response = SearchResponse::new(vec![job.clone(), job], "Cook");

        assert_eq!(response.total, 2);
        assert_eq!(response.query, "Cook");
    }

    #[test]
    fn test_job_serializes_with_snake_case_apply_url() {
        let job = Job {
            id: "abc".to_string(),
            title: "Cook".to_string(),
            company: "Diner".to_string(),
            location: None,
            salary: None,
            apply_url: Some("https://apply.example/abc".to_string()),
        };
        let value = serde_json::to_value(&job).unwrap();

        assert_eq!(value["apply_url"], "https://apply.example/abc");
        assert!(value["salary"].is_null());
    }
}
