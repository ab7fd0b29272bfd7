//! End-to-end tests for the job search API
//!
//! These tests run the API on a real TCP listener and talk to it with an
//! HTTP client, with the provider replaced by an in-process fake.

#[allow(dead_code)]
#[path = "../integration/fake_upstream.rs"]
mod fake_upstream;

mod http_workflow;
