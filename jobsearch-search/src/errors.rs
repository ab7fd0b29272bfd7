//! Error types for job search functionality.

use thiserror::Error;

/// Errors that can occur while serving a job search.
///
/// Every variant maps to exactly one caller-facing HTTP status via
/// [`JobSearchError::status_code`]. None of them is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobSearchError {
    /// No provider credential was configured at startup.
    #[error("API key not configured. Please set RAPIDAPI_KEY environment variable.")]
    ConfigurationMissing,

    /// Provider answered with a status other than 200.
    #[error("Job search API error: {body}")]
    UpstreamError {
        /// Status code returned by the provider
        status: u16,
        /// Raw response body returned by the provider
        body: String,
    },

    /// Provider did not answer within the configured timeout.
    #[error("Job search request timed out. Please try again.")]
    Timeout,

    /// Connection or other transport-level failure reaching the provider.
    #[error("Failed to connect to job search service: {reason}")]
    TransportFailure {
        /// Message of the underlying transport error
        reason: String,
    },

    /// Any other failure while processing the search.
    #[error("Internal server error: {reason}")]
    Internal {
        /// Description of what went wrong
        reason: String,
    },
}

impl JobSearchError {
    /// HTTP status code the caller should receive for this error.
    ///
    /// Upstream errors pass the provider's status through unchanged.
    pub fn status_code(&self) -> u16 {
        match self {
            JobSearchError::ConfigurationMissing => 500,
            JobSearchError::UpstreamError { status, .. } => *status,
            JobSearchError::Timeout => 504,
            JobSearchError::TransportFailure { .. } => 503,
            JobSearchError::Internal { .. } => 500,
        }
    }

    /// Classifies a `reqwest` failure into the caller-facing taxonomy.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            JobSearchError::Timeout
        } else if err.is_connect() || err.is_request() || err.is_body() {
            JobSearchError::TransportFailure {
                reason: err.to_string(),
            }
        } else {
            JobSearchError::Internal {
                reason: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(JobSearchError::ConfigurationMissing.status_code(), 500);
        assert_eq!(JobSearchError::Timeout.status_code(), 504);
        assert_eq!(
            JobSearchError::TransportFailure {
                reason: "refused".to_string()
            }
            .status_code(),
            503
        );
        assert_eq!(
            JobSearchError::Internal {
                reason: "boom".to_string()
            }
            .status_code(),
            500
        );
        assert_eq!(
            JobSearchError::UpstreamError {
                status: 429,
                body: "slow down".to_string()
            }
            .status_code(),
            429
        );
    }

    #[test]
    fn test_upstream_error_detail_carries_body() {
        let error = JobSearchError::UpstreamError {
            status: 403,
            body: "{\"message\":\"not subscribed\"}".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Job search API error: {\"message\":\"not subscribed\"}"
        );
    }

    #[test]
    fn test_transport_detail_includes_reason() {
        let error = JobSearchError::TransportFailure {
            reason: "connection refused".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to connect to job search service: connection refused"
        );
    }
}
