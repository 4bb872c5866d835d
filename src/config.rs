//! Runtime configuration for the server binary.
//!
//! The note store and request handler read no configuration; everything here
//! concerns process bootstrap (which transport to serve, where to bind, what
//! to log).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::{Parser, ValueEnum};

pub const DEFAULT_LOG_FILTER: &str = "notes_mcp=info";

/// Transport the MCP server is served over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Transport {
    /// JSON-RPC over stdin/stdout (for clients that spawn the server)
    #[default]
    Stdio,
    /// Streamable HTTP mounted at /mcp
    Http,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub transport: Transport,
    /// Host address to bind to (HTTP only)
    pub host: IpAddr,
    /// Port to listen on (HTTP only)
    pub port: u16,
    /// Default tracing filter, used when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            transport: Transport::default(),
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Parser, Debug)]
#[command(name = "notes-mcp")]
#[command(author, version, about = "In-memory notes MCP server", long_about = None)]
pub struct Cli {
    /// Transport to serve the MCP protocol over
    #[arg(long, value_enum, default_value_t = Transport::Stdio)]
    pub transport: Transport,

    /// Host address to bind to (http transport)
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on (http transport)
    #[arg(short, long, default_value = "3000")]
    pub port: u16,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = DEFAULT_LOG_FILTER)]
    pub log_level: String,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            transport: cli.transport,
            host: cli.host,
            port: cli.port,
            log_filter: cli.log_level,
        }
    }
}
