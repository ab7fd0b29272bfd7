//! HTTP request handlers organized by functionality

pub mod api;
pub mod system;

// Re-export handler functions
pub use api::{JobSearchQuery, api_search_jobs};
pub use system::{HealthStatus, ServiceInfo, health, root};
