//! Tests for the request handler, including the end-to-end note lifecycle.

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, RawContent, ResourceContents};
use serde_json::json;

use crate::mcp::{HandlerError, NoteHandler};
use crate::store::{InMemoryNoteStore, MockNoteRepository, NoteRepository};

fn handler() -> NoteHandler<InMemoryNoteStore> {
    NoteHandler::new(InMemoryNoteStore::new())
}

fn args(value: serde_json::Value) -> Option<JsonObject> {
    value.as_object().cloned()
}

fn response_json(result: &CallToolResult) -> serde_json::Value {
    let content_text = match &result.content[0].raw {
        RawContent::Text(text) => text.text.as_str(),
        _ => panic!("Expected text content"),
    };
    serde_json::from_str(content_text).unwrap()
}

fn read_text(handler: &NoteHandler<InMemoryNoteStore>, uri: &str) -> Result<String, HandlerError> {
    let result = handler.read_resource(uri)?;
    match &result.contents[0] {
        ResourceContents::TextResourceContents { text, .. } => Ok(text.clone()),
        other => panic!("Expected text contents, got {:?}", other),
    }
}

#[test]
fn list_resources_on_empty_store_is_empty() {
    assert!(handler().list_resources().is_empty());
}

#[test]
fn note_lifecycle_through_protocol_verbs() {
    let handler = handler();

    let created = handler
        .call_tool("create-note", args(json!({"content": "Buy milk"})))
        .unwrap();
    let id = response_json(&created)["id"].as_str().unwrap().to_string();

    let resources = handler.list_resources();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].raw.uri, format!("note://{}", id));

    assert_eq!(read_text(&handler, &format!("note://{}", id)).unwrap(), "Buy milk");

    let deleted = handler
        .call_tool("delete-note", args(json!({"id": id})))
        .unwrap();
    assert_eq!(response_json(&deleted)["success"], true);

    assert!(handler.list_resources().is_empty());

    let err = read_text(&handler, &format!("note://{}", id)).unwrap_err();
    assert_eq!(err, HandlerError::NotFound { id: id.clone() });
    assert!(err.to_string().contains(&id));
}

#[test]
fn create_without_content_is_validation_error_and_store_unchanged() {
    let handler = handler();

    let err = handler.call_tool("create-note", args(json!({}))).unwrap_err();

    assert_eq!(err, HandlerError::missing_field("content"));
    assert!(handler.store().is_empty());
}

#[test]
fn malformed_uri_is_validation_not_not_found() {
    let handler = handler();

    let err = handler.read_resource("note://").unwrap_err();
    assert!(err.is_validation());

    let err = handler.read_resource("notes").unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn malformed_uri_never_reaches_store() {
    let mut store = MockNoteRepository::new();
    store.expect_get().never();
    let handler: NoteHandler<MockNoteRepository> = NoteHandler::new(Arc::new(store));

    assert!(handler.read_resource("http://example.com").is_err());
}

#[test]
fn unknown_tool_is_validation_error() {
    let err = handler().call_tool("rename-note", None).unwrap_err();

    assert!(matches!(err, HandlerError::Validation { ref field, .. } if field == "name"));
}

#[test]
fn delete_with_empty_id_is_validation_error() {
    let mut store = MockNoteRepository::new();
    store.expect_delete().never();
    let handler: NoteHandler<MockNoteRepository> = NoteHandler::new(Arc::new(store));

    let err = handler
        .call_tool("delete-note", args(json!({"id": ""})))
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err, HandlerError::invalid_field("id", "must not be empty"));
}

#[test]
fn delete_unknown_id_names_the_id() {
    let err = handler()
        .call_tool("delete-note", args(json!({"id": "deadbeef"})))
        .unwrap_err();

    assert_eq!(
        err,
        HandlerError::NotFound {
            id: "deadbeef".to_string()
        }
    );
}

#[test]
fn list_tools_does_not_touch_store() {
    let store = MockNoteRepository::new();
    let handler: NoteHandler<MockNoteRepository> = NoteHandler::new(Arc::new(store));

    let tools = handler.list_tools();

    assert!(tools.iter().any(|t| t.name == "create-note"));
    assert!(tools.iter().any(|t| t.name == "delete-note"));
}

#[test]
fn list_resources_tracks_creates_and_deletes() {
    let handler = handler();
    let store = Arc::clone(handler.store());
    let ids: Vec<String> = (0..6).map(|i| store.create(format!("note {}", i))).collect();

    for id in &ids[..2] {
        handler
            .call_tool("delete-note", args(json!({"id": id})))
            .unwrap();
    }

    let uris: Vec<String> = handler
        .list_resources()
        .into_iter()
        .map(|r| r.raw.uri)
        .collect();
    let expected: Vec<String> = ids[2..].iter().map(|id| format!("note://{}", id)).collect();
    assert_eq!(uris, expected);
}

#[test]
fn read_resource_returns_full_body_not_summary() {
    let handler = handler();
    let body = format!("{}\nsecond line", "a".repeat(80));
    let id = handler.store().create(body.clone());

    assert_eq!(read_text(&handler, &format!("note://{}", id)).unwrap(), body);
}
