//! Notes MCP server binary.
//!
//! Constructs the process-wide note store and serves it over the configured
//! transport. Logs go to stderr because stdout carries the stdio transport.

use clap::Parser;
use miette::Result;
use notes_mcp::config::{Cli, Config};
use notes_mcp::mcp;
use notes_mcp::store::InMemoryNoteStore;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber with env filter
fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from(Cli::parse());
    init_tracing(&config.log_filter);

    info!(transport = ?config.transport, "Starting notes-mcp");

    mcp::serve(&config, InMemoryNoteStore::new()).await?;

    Ok(())
}
