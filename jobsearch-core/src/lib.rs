//! Jobsearch Core - Shared configuration and process setup
//!
//! Holds the immutable service configuration read at startup and the
//! tracing initialization used by the binaries.

pub mod config;
pub mod tracing_setup;

pub use config::{ConfigError, CorsPolicy, ProviderConfig, ServerConfig, ServiceConfig};
pub use tracing_setup::{CliLogLevel, init_tracing};
