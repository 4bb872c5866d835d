//! Note tool implementations
//!
//! Handles every MCP tool that reads or mutates the note store.
//!
//! Tools are not registered through rmcp's `#[tool_router]` macros. Names
//! resolve through the closed [`NoteTool`] catalog and [`NoteTools::call`]
//! dispatches on it, so unknown names and missing fields surface as
//! validation errors naming the field. Tool methods are synchronous
//! because the store never awaits.

use std::sync::Arc;

use rmcp::{
    model::{CallToolResult, Content, JsonObject},
    schemars,
    schemars::JsonSchema,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::info;

use super::NoteTool;
use crate::mcp::HandlerResult;
use crate::mcp::resources::note_uri;
use crate::store::NoteRepository;

// Parameter types for tools
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateNoteParams {
    #[schemars(description = "Text content of the note (may be empty)")]
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetNoteParams {
    #[schemars(description = "Note ID", length(min = 1))]
    pub id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListNotesParams {}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateNoteParams {
    #[schemars(description = "Note ID to update", length(min = 1))]
    pub id: String,
    #[schemars(description = "New content. Replaces the existing content entirely.")]
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteNoteParams {
    #[schemars(description = "Note ID to delete", length(min = 1))]
    pub id: String,
}

/// Note management tools
///
/// Generic over `R: NoteRepository` for zero-cost abstraction.
pub struct NoteTools<R: NoteRepository> {
    store: Arc<R>,
}

impl<R: NoteRepository> Clone for NoteTools<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<R: NoteRepository> NoteTools<R> {
    /// Create new NoteTools backed by the given store
    pub fn new(store: Arc<R>) -> Self {
        Self { store }
    }

    /// Validate `arguments` for `tool` and run it.
    pub fn call(
        &self,
        tool: NoteTool,
        arguments: Option<JsonObject>,
    ) -> HandlerResult<CallToolResult> {
        match tool {
            NoteTool::CreateNote => self.create_note(tool.parse_arguments(arguments)?),
            NoteTool::GetNote => self.get_note(tool.parse_arguments(arguments)?),
            NoteTool::ListNotes => self.list_notes(tool.parse_arguments(arguments)?),
            NoteTool::UpdateNote => self.update_note(tool.parse_arguments(arguments)?),
            NoteTool::DeleteNote => self.delete_note(tool.parse_arguments(arguments)?),
        }
    }

    /// Create a new note
    pub fn create_note(&self, params: CreateNoteParams) -> HandlerResult<CallToolResult> {
        let id = self.store.create(params.content);
        info!(note_id = %id, "Created note");

        Ok(json_result(json!({
            "id": id,
            "uri": note_uri(&id),
            "message": format!("Note '{}' created successfully", id),
        })))
    }

    /// Get a note by ID
    pub fn get_note(&self, params: GetNoteParams) -> HandlerResult<CallToolResult> {
        let note = self.store.get(&params.id)?;

        Ok(json_result(json!({
            "id": note.id,
            "content": note.content,
        })))
    }

    /// List all notes as summaries
    pub fn list_notes(&self, _params: ListNotesParams) -> HandlerResult<CallToolResult> {
        let items = self.store.list();

        Ok(json_result(json!({
            "total": items.len(),
            "items": items,
        })))
    }

    /// Replace the content of a note
    pub fn update_note(&self, params: UpdateNoteParams) -> HandlerResult<CallToolResult> {
        self.store.update(&params.id, params.content)?;
        info!(note_id = %params.id, "Updated note");

        Ok(json_result(json!({
            "success": true,
            "id": params.id,
            "message": format!("Note '{}' updated successfully", params.id),
        })))
    }

    /// Delete a note
    pub fn delete_note(&self, params: DeleteNoteParams) -> HandlerResult<CallToolResult> {
        self.store.delete(&params.id)?;
        info!(note_id = %params.id, "Deleted note");

        Ok(json_result(json!({
            "success": true,
            "id": params.id,
            "message": format!("Note '{}' deleted successfully", params.id),
        })))
    }
}

fn json_result(payload: Value) -> CallToolResult {
    CallToolResult::success(vec![Content::text(format!("{:#}", payload))])
}
