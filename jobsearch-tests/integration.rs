//! Integration tests for the job search service
//!
//! These tests verify the search service and HTTP layer against an
//! in-process fake of the upstream provider.

#[path = "integration/fake_upstream.rs"]
mod fake_upstream;

#[path = "integration/search_flow.rs"]
mod search_flow;

#[path = "integration/error_translation.rs"]
mod error_translation;
