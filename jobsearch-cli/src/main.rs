//! Jobsearch CLI - Command-line interface
//!
//! Runs the job search API server or a single search from the terminal.

mod commands;

use std::path::PathBuf;

use clap::Parser;
use jobsearch_core::{CliLogLevel, ServiceConfig, init_tracing};

#[derive(Parser)]
#[command(name = "jobsearch")]
#[command(about = "Job search proxy API")]
#[command(version)]
struct Cli {
    /// Console log level (RUST_LOG overrides)
    #[arg(long, value_enum, default_value_t = CliLogLevel::Info, global = true)]
    log_level: CliLogLevel,

    /// Directory for the full trace log
    #[arg(long, global = true)]
    logs_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_level.as_tracing_level(), cli.logs_dir.as_deref())?;

    let config = ServiceConfig::from_env()?;
    commands::handle_command(cli.command, config).await
}
