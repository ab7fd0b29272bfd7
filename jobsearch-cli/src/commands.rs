//! CLI command implementations

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;
use clap::Subcommand;
use jobsearch_core::ServiceConfig;
use jobsearch_search::types::{DEFAULT_JOB_TYPE, DEFAULT_LOCATION};
use jobsearch_search::{JobSearchService, SearchRequest};
use tracing::info;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
        host: IpAddr,
        /// Port to bind to
        #[arg(short, long, default_value_t = 8001)]
        port: u16,
    },
    /// Run one search and print the response as JSON
    Search {
        /// Job role or title
        #[arg(short, long)]
        role: String,
        /// Experience level: "Entry", "1-3 years", "3-5 years" or "5+ years"
        #[arg(short, long)]
        experience: String,
        /// Location filter
        #[arg(short, long, default_value = DEFAULT_LOCATION)]
        location: String,
        /// Employment type
        #[arg(short, long, default_value = DEFAULT_JOB_TYPE)]
        job_type: String,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns the failure of the command that was run
pub async fn handle_command(command: Commands, config: ServiceConfig) -> anyhow::Result<()> {
    match command {
        Commands::Serve { host, port } => start_server(config, SocketAddr::new(host, port)).await,
        Commands::Search {
            role,
            experience,
            location,
            job_type,
        } => {
            let request = SearchRequest::new(role, experience)
                .with_location(location)
                .with_job_type(job_type);
            run_search(config, request).await
        }
    }
}

async fn start_server(mut config: ServiceConfig, bind_address: SocketAddr) -> anyhow::Result<()> {
    config.server.bind_address = bind_address;
    info!("Starting job search API on {bind_address}");

    jobsearch_web::run_server(config)
        .await
        .context("job search API terminated with an error")
}

async fn run_search(config: ServiceConfig, request: SearchRequest) -> anyhow::Result<()> {
    let service = JobSearchService::from_config(&config.provider)?;

    let response = service.search_jobs(&request).await.map_err(|e| {
        anyhow::anyhow!("search failed with status {}: {e}", e.status_code())
    })?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
