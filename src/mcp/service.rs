//! MCP transports
//!
//! stdio for clients that spawn the server as a subprocess, and Streamable
//! HTTP nested into an Axum router for long-running deployments. Both serve
//! [`McpServer`] over one shared store.

use std::sync::Arc;

use miette::Diagnostic;
use rmcp::{
    ServiceExt,
    transport::{
        stdio,
        streamable_http_server::{
            StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
        },
    },
};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::server::McpServer;
use crate::config::{Config, Transport};
use crate::store::NoteRepository;

#[derive(Error, Diagnostic, Debug)]
pub enum ServeError {
    #[error("Failed to start stdio transport: {message}")]
    #[diagnostic(code(notes_mcp::serve::stdio))]
    Stdio { message: String },

    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(
        code(notes_mcp::serve::bind),
        help("Is another process listening on this port? Try --port")
    )]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server error: {0}")]
    #[diagnostic(code(notes_mcp::serve::http))]
    Http(#[from] std::io::Error),
}

/// Create MCP Streamable HTTP service
///
/// Every session gets its own `McpServer` clone; all clones share `store`.
///
/// # Example
/// ```no_run
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// use notes_mcp::mcp::create_mcp_service;
/// use notes_mcp::store::InMemoryNoteStore;
///
/// let ct = CancellationToken::new();
/// let mcp_service = create_mcp_service(InMemoryNoteStore::new(), ct);
///
/// let app: Router = Router::new().nest_service("/mcp", mcp_service);
/// ```
pub fn create_mcp_service<R: NoteRepository + 'static>(
    store: impl Into<Arc<R>>,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<McpServer<R>, LocalSessionManager> {
    let server = McpServer::new(store);

    // Returns io::Error to match rmcp's expected signature
    let service_factory = move || -> Result<McpServer<R>, std::io::Error> { Ok(server.clone()) };

    let config = StreamableHttpServerConfig::default()
        .with_stateful_mode(true)
        .with_cancellation_token(cancellation_token);

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}

/// Serve over stdin/stdout until the client disconnects.
pub async fn serve_stdio<R: NoteRepository + 'static>(
    store: impl Into<Arc<R>>,
) -> Result<(), ServeError> {
    info!("Serving MCP over stdio");

    let running = McpServer::new(store)
        .serve(stdio())
        .await
        .map_err(|e| ServeError::Stdio {
            message: e.to_string(),
        })?;

    let reason = running.waiting().await.map_err(|e| ServeError::Stdio {
        message: e.to_string(),
    })?;
    info!(?reason, "stdio session closed");
    Ok(())
}

/// Serve Streamable HTTP at `/mcp` until Ctrl-C.
pub async fn serve_http<R: NoteRepository + 'static>(
    config: &Config,
    store: impl Into<Arc<R>>,
) -> Result<(), ServeError> {
    let ct = CancellationToken::new();
    let app = axum::Router::new().nest_service("/mcp", create_mcp_service(store, ct.child_token()));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;
    info!("MCP server listening on http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(tokio::signal::ctrl_c(), ct))
        .await?;
    Ok(())
}

/// Cancel `ct` once `signal` fires.
///
/// If the signal handler cannot be installed the server keeps running
/// instead of shutting down immediately.
pub(crate) async fn shutdown_signal<F>(signal: F, ct: CancellationToken)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        warn!(error = %e, "Failed to listen for Ctrl-C, graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
    ct.cancel();
}

/// Serve over the transport selected in `config`.
pub async fn serve<R: NoteRepository + 'static>(
    config: &Config,
    store: impl Into<Arc<R>>,
) -> Result<(), ServeError> {
    match config.transport {
        Transport::Stdio => serve_stdio(store).await,
        Transport::Http => serve_http(config, store).await,
    }
}
