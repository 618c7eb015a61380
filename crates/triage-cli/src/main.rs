//! Triage CLI
//!
//! Heuristic intake classification service for ticketing systems.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::Cli;

/// Initialize tracing from `RUST_LOG`, falling back to a crate-scoped
/// default filter.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "triage=debug,triage_web=debug,triage_core=debug"
    } else {
        "triage=info,triage_web=info"
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.execute().await
}
