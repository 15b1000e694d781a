//! Shared handler state over the store connection.
//!
//! # Responsibility
//! - Hold the single SQLite connection behind a mutex.
//! - Give handlers a scoped, service-level view of the store.
//!
//! # Invariants
//! - Store access is serialized by the connection lock; the application
//!   layer adds no further locking.
//! - A poisoned lock surfaces as an internal error, never a panic.

use crate::error::ApiError;
use postit_core::{NoteService, RepoResult, SqliteNoteRepository};
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// Cloneable handler state wrapping the store connection.
#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps a migrated, ready connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Runs one store operation under the connection lock.
    pub fn with_service<T>(
        &self,
        op: impl FnOnce(&NoteService<SqliteNoteRepository<'_>>) -> RepoResult<T>,
    ) -> Result<T, ApiError> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| ApiError::internal("store connection lock poisoned"))?;
        let service = NoteService::new(SqliteNoteRepository::new(&conn));
        op(&service).map_err(ApiError::from)
    }
}
