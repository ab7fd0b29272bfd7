//! Jobsearch Web - JSON API Server

#![deny(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Exposes service identification, health and job search endpoints over
//! HTTP for frontend applications and external clients.

pub mod error;
pub mod handlers;
pub mod server;

// Re-export main types
pub use error::ApiError;
pub use server::{AppState, ServerError, build_router, run_server};
