//! Transport-agnostic request handling.
//!
//! [`NoteHandler`] maps the four protocol verbs onto the note store and
//! shapes the results. It holds no per-request state; every call runs
//! independently against the shared store.

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, ReadResourceResult, Resource, Tool};
use tracing::{debug, warn};

use super::resources::{note_contents, note_resource, parse_note_uri};
use super::tools::{self, NoteTool, NoteTools};
use crate::mcp::{HandlerError, HandlerResult};
use crate::store::NoteRepository;

pub struct NoteHandler<R: NoteRepository> {
    store: Arc<R>,
    note_tools: NoteTools<R>,
}

// Manual impl: only the Arc needs cloning, not R
impl<R: NoteRepository> Clone for NoteHandler<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            note_tools: self.note_tools.clone(),
        }
    }
}

impl<R: NoteRepository> NoteHandler<R> {
    pub fn new(store: impl Into<Arc<R>>) -> Self {
        let store = store.into();
        Self {
            note_tools: NoteTools::new(Arc::clone(&store)),
            store,
        }
    }

    /// Shared store backing this handler.
    pub fn store(&self) -> &Arc<R> {
        &self.store
    }

    /// One resource descriptor per stored note.
    pub fn list_resources(&self) -> Vec<Resource> {
        let resources: Vec<Resource> = self.store.list().iter().map(note_resource).collect();
        debug!(count = resources.len(), "Listing note resources");
        resources
    }

    /// Full content of the note addressed by `uri`.
    pub fn read_resource(&self, uri: &str) -> HandlerResult<ReadResourceResult> {
        let result = parse_note_uri(uri)
            .and_then(|id| self.store.get(id).map_err(HandlerError::from));

        match result {
            Ok(note) => {
                debug!(note_id = %note.id, "Reading note resource");
                Ok(ReadResourceResult::new(vec![note_contents(&note)]))
            }
            Err(e) => {
                warn!(uri, error = %e, "Rejected resource read");
                Err(e)
            }
        }
    }

    /// Static tool catalog; does not touch the store.
    pub fn list_tools(&self) -> Vec<Tool> {
        tools::catalog()
    }

    /// Resolve `name` in the catalog and run the tool with `arguments`.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> HandlerResult<CallToolResult> {
        let result = name
            .parse::<NoteTool>()
            .and_then(|tool| self.note_tools.call(tool, arguments));

        match &result {
            Ok(_) => debug!(tool = name, "Tool call succeeded"),
            Err(e) => warn!(tool = name, error = %e, "Tool call rejected"),
        }
        result
    }
}
