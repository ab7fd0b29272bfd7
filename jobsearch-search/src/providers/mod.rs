//! Provider implementations for upstream job search.

use async_trait::async_trait;

use crate::errors::JobSearchError;
use crate::upstream::{UpstreamQuery, UpstreamResponse};

pub mod jsearch;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use jsearch::JSearchProvider;
#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockProvider;

/// Trait for upstream job search providers.
///
/// One call to `search` is one outbound request; implementations never retry.
#[async_trait]
pub trait JobSearchProvider: Send + Sync + std::fmt::Debug {
    /// Runs a single search against the provider.
    ///
    /// # Errors
    /// - `JobSearchError::UpstreamError` - Provider answered with a non-200 status
    /// - `JobSearchError::Timeout` - Provider did not answer in time
    /// - `JobSearchError::TransportFailure` - Provider could not be reached
    /// - `JobSearchError::Internal` - Response could not be processed
    async fn search(&self, query: &UpstreamQuery) -> Result<UpstreamResponse, JobSearchError>;
}
