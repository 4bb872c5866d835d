//! Tests for Note MCP tools

use std::sync::Arc;

use rmcp::model::{CallToolResult, RawContent};
use serde_json::json;

use crate::mcp::HandlerError;
use crate::mcp::tools::{
    CreateNoteParams, DeleteNoteParams, GetNoteParams, ListNotesParams, NoteTool, NoteTools,
    UpdateNoteParams,
};
use crate::store::{InMemoryNoteStore, MockNoteRepository, NoteRepository};

fn response_json(result: &CallToolResult) -> serde_json::Value {
    let content_text = match &result.content[0].raw {
        RawContent::Text(text) => text.text.as_str(),
        _ => panic!("Expected text content"),
    };
    serde_json::from_str(content_text).unwrap()
}

fn tools() -> (Arc<InMemoryNoteStore>, NoteTools<InMemoryNoteStore>) {
    let store = Arc::new(InMemoryNoteStore::new());
    (Arc::clone(&store), NoteTools::new(store))
}

#[test]
fn test_list_notes_empty() {
    let (_, tools) = tools();

    let result = tools
        .list_notes(ListNotesParams::default())
        .expect("list_notes should succeed");

    let json = response_json(&result);
    assert_eq!(json["total"], 0);
    assert_eq!(json["items"].as_array().unwrap().len(), 0);
}

#[test]
fn test_create_and_get_note() {
    let (_, tools) = tools();

    let result = tools
        .create_note(CreateNoteParams {
            content: "# Meeting with team\n\n- Discussed project timeline".to_string(),
        })
        .expect("create should succeed");

    let created = response_json(&result);
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["uri"], format!("note://{}", id));

    let result = tools
        .get_note(GetNoteParams { id: id.clone() })
        .expect("get should succeed");

    let fetched = response_json(&result);
    assert_eq!(fetched["id"], id);
    assert_eq!(
        fetched["content"],
        "# Meeting with team\n\n- Discussed project timeline"
    );
}

#[test]
fn test_get_note_not_found() {
    let (_, tools) = tools();

    let err = tools
        .get_note(GetNoteParams {
            id: "nonexist".to_string(),
        })
        .unwrap_err();

    assert_eq!(
        err,
        HandlerError::NotFound {
            id: "nonexist".to_string()
        }
    );
}

#[test]
fn test_list_notes_returns_summaries() {
    let (store, tools) = tools();
    store.create("Work Note\nwith details".to_string());
    store.create("Personal Note".to_string());

    let json = response_json(&tools.list_notes(ListNotesParams::default()).unwrap());

    assert_eq!(json["total"], 2);
    let items = json["items"].as_array().unwrap();
    assert_eq!(items[0]["summary"], "Work Note...");
    assert_eq!(items[1]["summary"], "Personal Note");
    assert!(items[0].get("content").is_none());
}

#[test]
fn test_update_note_replaces_content() {
    let (store, tools) = tools();
    let id = store.create("Original".to_string());

    let json = response_json(
        &tools
            .update_note(UpdateNoteParams {
                id: id.clone(),
                content: "Updated".to_string(),
            })
            .unwrap(),
    );

    assert_eq!(json["success"], true);
    assert_eq!(store.get(&id).unwrap().content, "Updated");
}

#[test]
fn test_update_note_not_found() {
    let (_, tools) = tools();

    let err = tools
        .update_note(UpdateNoteParams {
            id: "00000042".to_string(),
            content: "x".to_string(),
        })
        .unwrap_err();

    assert!(err.is_not_found());
}

#[test]
fn test_delete_note() {
    let (store, tools) = tools();
    let id = store.create("To Delete".to_string());

    let json = response_json(&tools.delete_note(DeleteNoteParams { id: id.clone() }).unwrap());

    assert_eq!(json["success"], true);
    assert_eq!(json["id"], id);
    assert!(store.get(&id).is_err());
}

#[test]
fn test_delete_note_twice_names_the_id() {
    let (store, tools) = tools();
    let id = store.create("Once".to_string());
    tools.delete_note(DeleteNoteParams { id: id.clone() }).unwrap();

    let err = tools.delete_note(DeleteNoteParams { id: id.clone() }).unwrap_err();

    assert!(err.to_string().contains(&id));
}

#[test]
fn test_call_dispatches_by_tool() {
    let (store, tools) = tools();

    let result = tools
        .call(
            NoteTool::CreateNote,
            json!({"content": "via dispatch"}).as_object().cloned(),
        )
        .unwrap();

    let id = response_json(&result)["id"].as_str().unwrap().to_string();
    assert_eq!(store.get(&id).unwrap().content, "via dispatch");
}

#[test]
fn test_call_with_missing_content_never_reaches_store() {
    let mut store = MockNoteRepository::new();
    store.expect_create().never();
    let tools = NoteTools::new(Arc::new(store));

    let err = tools
        .call(NoteTool::CreateNote, json!({}).as_object().cloned())
        .unwrap_err();

    assert_eq!(err, HandlerError::missing_field("content"));
}

#[test]
fn test_call_with_missing_id_never_reaches_store() {
    let mut store = MockNoteRepository::new();
    store.expect_delete().never();
    let tools = NoteTools::new(Arc::new(store));

    let err = tools.call(NoteTool::DeleteNote, None).unwrap_err();

    assert_eq!(err, HandlerError::missing_field("id"));
}
