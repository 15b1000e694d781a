//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable create/list/delete APIs over the `notes` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `NewNote::validate()` before SQL mutations.
//! - `create_note` returns the row as persisted, SQL defaults included.
//! - List order is `created_at DESC, id DESC`; the caller never re-sorts.
//! - Deleting an absent id is `Ok(false)`, not an error.

use crate::db::DbError;
use crate::model::note::{NewNote, Note, NoteId, NoteValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const NOTE_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    created_at,
    updated_at
FROM notes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for note persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(NoteValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<NoteValidationError> for RepoError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for note store operations.
pub trait NoteRepository {
    /// Persists a new note and returns it as stored, id and timestamps
    /// included.
    fn create_note(&self, new_note: &NewNote) -> RepoResult<Note>;
    /// Lists all notes, newest first. Empty store yields an empty vec.
    fn list_notes(&self) -> RepoResult<Vec<Note>>;
    /// Removes one note by id. Returns whether a row was deleted.
    fn delete_note(&self, id: NoteId) -> RepoResult<bool>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs a repository from a migrated, ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn create_note(&self, new_note: &NewNote) -> RepoResult<Note> {
        new_note.validate()?;

        self.conn.execute(
            "INSERT INTO notes (title, content) VALUES (?1, ?2);",
            params![new_note.effective_title(), new_note.content.as_str()],
        )?;

        // Read the row back so callers see exactly what persisted,
        // including the timestamp defaults applied by the schema.
        let id = self.conn.last_insert_rowid();
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        match rows.next()? {
            Some(row) => parse_note_row(row),
            None => Err(RepoError::InvalidData(format!(
                "inserted note {id} could not be read back"
            ))),
        }
    }

    fn list_notes(&self) -> RepoResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(&format!(
            "{NOTE_SELECT_SQL} ORDER BY created_at DESC, id DESC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }

        Ok(notes)
    }

    fn delete_note(&self, id: NoteId) -> RepoResult<bool> {
        let changed = self.conn.execute("DELETE FROM notes WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    let id: NoteId = row.get("id")?;

    let content: String = row.get("content")?;
    if content.is_empty() {
        return Err(RepoError::InvalidData(format!(
            "note {id} has empty content in notes.content"
        )));
    }

    Ok(Note {
        id,
        title: row.get("title")?,
        content,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
