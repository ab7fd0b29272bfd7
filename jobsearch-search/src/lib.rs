//! Jobsearch Search - Upstream job search and result shaping

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Builds provider search strings from a role and experience level, calls the
//! upstream provider once per request, and maps its records into a fixed,
//! null-safe job schema.

pub mod errors;
pub mod mapping;
pub mod providers;
pub mod query;
pub mod service;
pub mod types;
pub mod upstream;

// Re-export main types
pub use errors::JobSearchError;
pub use mapping::map_job;
pub use providers::{JSearchProvider, JobSearchProvider};
pub use query::{ExperienceLevel, build_search_query};
pub use service::JobSearchService;
pub use types::{Job, SearchRequest, SearchResponse};
pub use upstream::{UpstreamJob, UpstreamQuery, UpstreamResponse};

/// Convenience type alias for Results with JobSearchError.
pub type Result<T> = std::result::Result<T, JobSearchError>;
