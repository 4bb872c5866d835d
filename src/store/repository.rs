//! Repository trait for note access.
//!
//! The MCP layer is generic over this trait so the store can be swapped
//! (or mocked in tests) without touching request handling.

use crate::store::{Note, NoteSummary, StoreResult};

/// Note storage operations.
///
/// Every call is atomic with respect to every other call. No multi-call
/// transaction is offered.
#[cfg_attr(test, mockall::automock)]
pub trait NoteRepository: Send + Sync {
    /// Store `content` under a freshly allocated id and return that id.
    fn create(&self, content: String) -> String;

    /// Get a note by ID.
    fn get(&self, id: &str) -> StoreResult<Note>;

    /// Snapshot of all current notes as summaries.
    fn list(&self) -> Vec<NoteSummary>;

    /// Replace the content of an existing note.
    fn update(&self, id: &str, content: String) -> StoreResult<()>;

    /// Delete a note by ID.
    fn delete(&self, id: &str) -> StoreResult<()>;
}
