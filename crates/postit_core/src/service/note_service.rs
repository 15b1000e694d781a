//! Note use-case service.
//!
//! # Responsibility
//! - Provide stable create/list/delete entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence
//!   contracts.
//! - Service layer remains storage-agnostic.

use crate::model::note::{NewNote, Note, NoteId};
use crate::repo::note_repo::{NoteRepository, RepoResult};

/// Use-case service wrapper for note store operations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a note from caller-supplied title and content.
    ///
    /// # Contract
    /// - Missing or blank title collapses to the placeholder at
    ///   persistence time.
    /// - Empty content is rejected before any SQL runs.
    /// - Returns the note as persisted, id and timestamps included.
    pub fn create_note(
        &self,
        title: Option<String>,
        content: impl Into<String>,
    ) -> RepoResult<Note> {
        let new_note = NewNote::new(title, content);
        self.repo.create_note(&new_note)
    }

    /// Lists all notes, newest first.
    pub fn list_notes(&self) -> RepoResult<Vec<Note>> {
        self.repo.list_notes()
    }

    /// Deletes one note by id. Returns whether a row was removed.
    ///
    /// An absent id is a normal outcome (`Ok(false)`), never an error.
    pub fn delete_note(&self, id: NoteId) -> RepoResult<bool> {
        self.repo.delete_note(id)
    }
}
