//! MCP server implementation
//!
//! Adapts [`NoteHandler`] to `rmcp::ServerHandler`. Protocol framing,
//! handshake and capability negotiation are handled by rmcp; this type only
//! answers the resource and tool requests.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::{
        CallToolRequestParams, CallToolResult, Implementation, ListResourcesResult,
        ListToolsResult, PaginatedRequestParams, ReadResourceRequestParams, ReadResourceResult,
        ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
};

use super::handler::NoteHandler;
use crate::store::NoteRepository;

pub const SERVER_NAME: &str = "notes-mcp";

/// Main MCP server coordinator
///
/// Generic over `R: NoteRepository` for zero-cost abstraction (no dynamic
/// dispatch). Cloning is cheap and every clone shares the same store, which
/// is how the HTTP transport gives each session its own server instance.
pub struct McpServer<R: NoteRepository> {
    handler: NoteHandler<R>,
}

impl<R: NoteRepository> Clone for McpServer<R> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
        }
    }
}

impl<R: NoteRepository> McpServer<R> {
    /// Create a new MCP server over the given store
    pub fn new(store: impl Into<Arc<R>>) -> Self {
        Self {
            handler: NoteHandler::new(store),
        }
    }

    pub fn handler(&self) -> &NoteHandler<R> {
        &self.handler
    }
}

impl<R: NoteRepository + 'static> ServerHandler for McpServer<R> {
    fn get_info(&self) -> ServerInfo {
        let capabilities = ServerCapabilities::builder()
            .enable_tools()
            .enable_resources()
            .build();

        ServerInfo::new(capabilities)
            .with_server_info(Implementation::new(
                SERVER_NAME,
                env!("CARGO_PKG_VERSION"),
            ))
            .with_instructions(
                "Notes MCP Server - Read notes as note://{id} resources; \
                 create, update and delete them with tools",
            )
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(
            self.handler.list_resources(),
        ))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.handler
            .read_resource(&request.uri)
            .map_err(McpError::from)
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.handler.list_tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.handler
            .call_tool(&request.name, request.arguments)
            .map_err(McpError::from)
    }
}
