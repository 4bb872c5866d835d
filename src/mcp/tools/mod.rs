//! MCP tool catalog and implementations
//!
//! The catalog is a closed enum: every tool the server accepts is a
//! [`NoteTool`] variant, list-tools publishes exactly [`NoteTool::ALL`], and
//! call-tool resolves names through the same enum, so an unknown name is a
//! validation error rather than a silent no-op.

mod notes;

#[cfg(test)]
mod notes_test;

pub use notes::{
    CreateNoteParams, DeleteNoteParams, GetNoteParams, ListNotesParams, NoteTools,
    UpdateNoteParams,
};

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use rmcp::schemars::{self, JsonSchema};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::mcp::{HandlerError, HandlerResult};

/// Every tool this server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteTool {
    CreateNote,
    GetNote,
    ListNotes,
    UpdateNote,
    DeleteNote,
}

impl NoteTool {
    pub const ALL: [NoteTool; 5] = [
        NoteTool::CreateNote,
        NoteTool::GetNote,
        NoteTool::ListNotes,
        NoteTool::UpdateNote,
        NoteTool::DeleteNote,
    ];

    /// Wire name of the tool.
    pub fn name(self) -> &'static str {
        match self {
            NoteTool::CreateNote => "create-note",
            NoteTool::GetNote => "get-note",
            NoteTool::ListNotes => "list-notes",
            NoteTool::UpdateNote => "update-note",
            NoteTool::DeleteNote => "delete-note",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            NoteTool::CreateNote => {
                "Create a new note. The server assigns and returns the note ID."
            }
            NoteTool::GetNote => "Get the full content of a note by ID.",
            NoteTool::ListNotes => "List all notes with their IDs and a short summary.",
            NoteTool::UpdateNote => "Replace the content of an existing note.",
            NoteTool::DeleteNote => "Delete a note by ID.",
        }
    }

    /// JSON schema of the tool's arguments, generated from its params struct.
    pub fn input_schema(self) -> JsonObject {
        match self {
            NoteTool::CreateNote => schema_of::<CreateNoteParams>(),
            NoteTool::GetNote => schema_of::<GetNoteParams>(),
            NoteTool::ListNotes => schema_of::<ListNotesParams>(),
            NoteTool::UpdateNote => schema_of::<UpdateNoteParams>(),
            NoteTool::DeleteNote => schema_of::<DeleteNoteParams>(),
        }
    }

    /// Fields the published schema marks as required.
    pub fn required_fields(self) -> Vec<String> {
        required_fields(&self.input_schema())
    }

    /// Catalog entry as served by list-tools.
    pub fn definition(self) -> Tool {
        Tool::new(self.name(), self.description(), Arc::new(self.input_schema()))
    }

    /// Validate raw call arguments against this tool's schema and decode them.
    ///
    /// Required fields are checked for presence, JSON type and `minLength`
    /// first so the error names the offending field; decoding happens only
    /// afterwards.
    pub fn parse_arguments<T: DeserializeOwned>(
        self,
        arguments: Option<JsonObject>,
    ) -> HandlerResult<T> {
        let arguments = arguments.unwrap_or_default();
        let schema = self.input_schema();

        for field in required_fields(&schema) {
            let value = match arguments.get(&field) {
                None | Some(Value::Null) => return Err(HandlerError::missing_field(field)),
                Some(value) => value,
            };

            if let Some(expected) = property_type(&schema, &field) {
                if !matches_type(value, expected) {
                    return Err(HandlerError::invalid_field(
                        field,
                        format!("expected a {}", expected),
                    ));
                }
            }

            if let (Some(text), Some(min)) = (value.as_str(), min_length(&schema, &field)) {
                if (text.chars().count() as u64) < min {
                    let message = if min == 1 {
                        "must not be empty".to_string()
                    } else {
                        format!("must be at least {} characters", min)
                    };
                    return Err(HandlerError::invalid_field(field, message));
                }
            }
        }

        serde_json::from_value(Value::Object(arguments))
            .map_err(|e| HandlerError::invalid_field("arguments", e.to_string()))
    }
}

impl fmt::Display for NoteTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NoteTool {
    type Err = HandlerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoteTool::ALL
            .into_iter()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| HandlerError::invalid_field("name", format!("unknown tool '{}'", s)))
    }
}

/// The full tool catalog, in declaration order.
pub fn catalog() -> Vec<Tool> {
    NoteTool::ALL.into_iter().map(NoteTool::definition).collect()
}

fn schema_of<T: JsonSchema>() -> JsonObject {
    let schema = schemars::schema_for!(T);
    match serde_json::to_value(schema) {
        Ok(Value::Object(mut object)) => {
            object.remove("$schema");
            object
        }
        _ => JsonObject::new(),
    }
}

fn required_fields(schema: &JsonObject) -> Vec<String> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|fields| {
            fields
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn property_type<'a>(schema: &'a JsonObject, field: &str) -> Option<&'a str> {
    schema
        .get("properties")?
        .get(field)?
        .get("type")?
        .as_str()
}

fn min_length(schema: &JsonObject, field: &str) -> Option<u64> {
    schema
        .get("properties")?
        .get(field)?
        .get("minLength")?
        .as_u64()
}

fn matches_type(value: &Value, expected: &str) -> bool {
    match expected {
        "string" => value.is_string(),
        "boolean" => value.is_boolean(),
        "integer" => value.is_i64() || value.is_u64(),
        "number" => value.is_number(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        _ => true,
    }
}
