//! Model Context Protocol (MCP) server implementation
//!
//! Exposes the note store to MCP clients. Notes are published as read-only
//! resources under `note://{id}` and mutated through tools.
//!
//! # Architecture
//!
//! - **handler**: Transport-agnostic request handling over a `NoteRepository`
//! - **server**: `rmcp::ServerHandler` adapter around the handler
//! - **resources**: Resource URI scheme and descriptors
//! - **tools**: Static tool catalog and tool implementations
//! - **error**: Validation/not-found errors and their protocol mapping
//! - **service**: stdio and Streamable HTTP transports
//!
//! Everything is generic over `R: NoteRepository`, so the store can be
//! swapped or mocked without dynamic dispatch.

pub mod error;
pub mod handler;
pub mod resources;
pub mod server;
mod service;
pub mod tools;

#[cfg(test)]
mod handler_test;

pub use error::{HandlerError, HandlerResult};
pub use handler::NoteHandler;
pub use server::McpServer;
pub use service::{ServeError, create_mcp_service, serve, serve_http, serve_stdio};
