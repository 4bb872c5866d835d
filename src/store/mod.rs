//! In-memory note storage.
//!
//! The store is the single authority over note identity and content. It is
//! constructed explicitly at startup and handed to the MCP layer, which is
//! generic over the [`NoteRepository`] trait.
//!
//! # Architecture
//!
//! - `error`: Store error types
//! - `models`: Note and summary entities
//! - `repository`: Trait definition for note access
//! - `memory`: Lock-guarded in-memory implementation

mod error;
mod memory;
mod models;
mod repository;

#[cfg(test)]
mod error_test;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryNoteStore;
pub use models::{Note, NoteSummary, SUMMARY_MAX_CHARS};
pub use repository::NoteRepository;

#[cfg(test)]
pub use repository::MockNoteRepository;
