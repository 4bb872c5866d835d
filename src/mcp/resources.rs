//! Note resources.
//!
//! Every stored note is published as a read-only resource addressed by
//! `note://{id}`.

use rmcp::model::{AnnotateAble, RawResource, Resource, ResourceContents};

use crate::mcp::{HandlerError, HandlerResult};
use crate::store::{Note, NoteSummary};

pub const NOTE_URI_SCHEME: &str = "note://";
pub const NOTE_MIME_TYPE: &str = "text/plain";

/// Build the resource URI for a note id.
pub fn note_uri(id: &str) -> String {
    format!("{}{}", NOTE_URI_SCHEME, id)
}

/// Extract the note id from a `note://{id}` URI.
///
/// A wrong scheme, an empty id, or an id containing `/` is a validation
/// error on `uri`, never a not-found.
pub fn parse_note_uri(uri: &str) -> HandlerResult<&str> {
    let id = uri.strip_prefix(NOTE_URI_SCHEME).ok_or_else(|| {
        HandlerError::invalid_field(
            "uri",
            format!("unsupported resource URI '{}', expected {}<id>", uri, NOTE_URI_SCHEME),
        )
    })?;

    if id.is_empty() {
        return Err(HandlerError::invalid_field(
            "uri",
            format!("resource URI '{}' has no note id", uri),
        ));
    }
    if id.contains('/') {
        return Err(HandlerError::invalid_field(
            "uri",
            format!("resource URI '{}' has a malformed note id", uri),
        ));
    }

    Ok(id)
}

/// Resource descriptor for a listing entry.
pub fn note_resource(summary: &NoteSummary) -> Resource {
    RawResource::new(note_uri(&summary.id), format!("Note: {}", summary.id))
        .with_description(summary.summary.clone())
        .with_mime_type(NOTE_MIME_TYPE)
        .no_annotation()
}

/// Full text contents of a note.
pub fn note_contents(note: &Note) -> ResourceContents {
    ResourceContents::text(note.content.clone(), note_uri(&note.id)).with_mime_type(NOTE_MIME_TYPE)
}
