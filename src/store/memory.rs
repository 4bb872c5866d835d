//! Lock-guarded in-memory `NoteRepository` implementation.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::store::{Note, NoteRepository, NoteSummary, StoreError, StoreResult};

/// Process-wide note store.
///
/// A single `RwLock` guards both the id counter and the note map, so id
/// allocation and insertion happen as one step. Ids come from a
/// monotonically increasing counter rendered as zero-padded hex, which
/// makes them unique for the life of the process and keeps `BTreeMap`
/// iteration in creation order.
#[derive(Debug, Default)]
pub struct InMemoryNoteStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    notes: BTreeMap<String, String>,
}

impl Inner {
    fn allocate_id(&mut self) -> String {
        self.next_id += 1;
        format!("{:08x}", self.next_id)
    }
}

impl InMemoryNoteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notes currently stored.
    pub fn len(&self) -> usize {
        self.read().notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().notes.is_empty()
    }

    // No operation leaves the map half-written, so a poisoned lock is
    // still consistent and safe to keep using.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NoteRepository for InMemoryNoteStore {
    fn create(&self, content: String) -> String {
        let mut inner = self.write();
        let id = inner.allocate_id();
        inner.notes.insert(id.clone(), content);
        debug!(note_id = %id, "note created");
        id
    }

    fn get(&self, id: &str) -> StoreResult<Note> {
        self.read()
            .notes
            .get(id)
            .map(|content| Note {
                id: id.to_string(),
                content: content.clone(),
            })
            .ok_or_else(|| StoreError::not_found(id))
    }

    fn list(&self) -> Vec<NoteSummary> {
        self.read()
            .notes
            .iter()
            .map(|(id, content)| NoteSummary::new(id.as_str(), content))
            .collect()
    }

    fn update(&self, id: &str, content: String) -> StoreResult<()> {
        let mut inner = self.write();
        match inner.notes.get_mut(id) {
            Some(existing) => {
                *existing = content;
                debug!(note_id = %id, "note updated");
                Ok(())
            }
            None => Err(StoreError::not_found(id)),
        }
    }

    fn delete(&self, id: &str) -> StoreResult<()> {
        if self.write().notes.remove(id).is_none() {
            return Err(StoreError::not_found(id));
        }
        debug!(note_id = %id, "note deleted");
        Ok(())
    }
}
