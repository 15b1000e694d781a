//! HTTP client for the notes API.
//!
//! # Responsibility
//! - Wrap the three API endpoints behind the `NotesApi` seam.
//! - Classify failures (network / http / parse) and surface the server's
//!   `message` for HTTP errors.
//!
//! # Invariants
//! - List responses are validated per item; one malformed entry never
//!   fails the whole fetch.

use log::warn;
use postit_core::{Note, NoteId};
use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Local development address used when no override is compiled in.
pub const DEFAULT_API_URL: &str = "http://localhost:10000/api";

/// Failure classification for client-side handling decisions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientErrorKind {
    /// The request never produced an HTTP response.
    Network,
    /// The server answered with a non-success status.
    Http,
    /// The response body did not match the expected shape.
    Parse,
}

/// API call failure with a user-presentable message.
#[derive(Clone, Debug)]
pub struct ClientError {
    pub kind: ClientErrorKind,
    pub message: String,
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ClientError {}

impl ClientError {
    fn network(err: reqwest::Error) -> Self {
        Self {
            kind: ClientErrorKind::Network,
            message: err.to_string(),
        }
    }

    fn parse(err: impl Display) -> Self {
        Self {
            kind: ClientErrorKind::Parse,
            message: err.to_string(),
        }
    }

    fn http(message: String) -> Self {
        Self {
            kind: ClientErrorKind::Http,
            message,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// One fetched list element after per-item validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListEntry {
    /// Well-formed note carrying an identifier.
    Note(Note),
    /// Entry that failed validation; rendered as a placeholder.
    Malformed,
}

impl ListEntry {
    /// Returns the note when this entry is well-formed.
    pub fn note(&self) -> Option<&Note> {
        match self {
            Self::Note(note) => Some(note),
            Self::Malformed => None,
        }
    }
}

/// Client-side contract over the three notes endpoints.
///
/// The controller depends on this seam, so tests can substitute an
/// in-memory implementation for the HTTP one.
pub trait NotesApi {
    /// Fetches the full ordered snapshot, newest first.
    fn list_notes(&self) -> ClientResult<Vec<ListEntry>>;
    /// Creates one note and returns it as persisted.
    fn create_note(&self, title: Option<String>, content: String) -> ClientResult<Note>;
    /// Deletes one note by id.
    fn delete_note(&self, id: NoteId) -> ClientResult<()>;
}

/// Resolves the API base URL.
///
/// A build-time `POSTIT_API_URL` wins; otherwise the local development
/// address.
pub fn default_base_url() -> String {
    option_env!("POSTIT_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}

#[derive(Debug, Serialize)]
struct CreateNoteBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    content: String,
}

/// Blocking reqwest implementation of [`NotesApi`].
pub struct HttpNotesApi {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpNotesApi {
    /// Builds a client against the compiled-in base URL.
    pub fn new() -> Self {
        Self::with_base_url(default_base_url())
    }

    /// Builds a client against an explicit base URL (tests, CLI flags).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Probes the sibling `/health` endpoint of the configured API root.
    pub fn health(&self) -> ClientResult<String> {
        let url = format!("{}/health", self.base_url.trim_end_matches("/api"));
        let response = self.client.get(&url).send().map_err(ClientError::network)?;
        let status = response.status();
        let body = response.text().map_err(ClientError::network)?;
        if !status.is_success() {
            return Err(ClientError::http(error_message(status, &body)));
        }
        Ok(body)
    }
}

impl Default for HttpNotesApi {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesApi for HttpNotesApi {
    fn list_notes(&self) -> ClientResult<Vec<ListEntry>> {
        let url = format!("{}/notes", self.base_url);
        let response = self.client.get(&url).send().map_err(ClientError::network)?;
        let status = response.status();
        let body = response.text().map_err(ClientError::network)?;

        if !status.is_success() {
            return Err(ClientError::http(error_message(status, &body)));
        }

        let values: Vec<Value> = serde_json::from_str(&body).map_err(ClientError::parse)?;
        Ok(values.into_iter().map(validate_entry).collect())
    }

    fn create_note(&self, title: Option<String>, content: String) -> ClientResult<Note> {
        let url = format!("{}/notes", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&CreateNoteBody { title, content })
            .send()
            .map_err(ClientError::network)?;
        let status = response.status();
        let body = response.text().map_err(ClientError::network)?;

        if !status.is_success() {
            return Err(ClientError::http(error_message(status, &body)));
        }

        serde_json::from_str(&body).map_err(ClientError::parse)
    }

    fn delete_note(&self, id: NoteId) -> ClientResult<()> {
        let url = format!("{}/notes/{id}", self.base_url);
        let response = self
            .client
            .delete(&url)
            .send()
            .map_err(ClientError::network)?;
        let status = response.status();
        let body = response.text().map_err(ClientError::network)?;

        if !status.is_success() {
            return Err(ClientError::http(error_message(status, &body)));
        }

        Ok(())
    }
}

/// Per-item defensiveness: a malformed array entry becomes a placeholder
/// instead of failing the whole fetch.
fn validate_entry(value: Value) -> ListEntry {
    match serde_json::from_value::<Note>(value) {
        Ok(note) => ListEntry::Note(note),
        Err(err) => {
            warn!("event=list_entry_invalid module=client status=error error={err}");
            ListEntry::Malformed
        }
    }
}

fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("server error ({status})"))
}

#[cfg(test)]
mod tests {
    use super::{validate_entry, ListEntry};
    use serde_json::json;

    #[test]
    fn validate_entry_accepts_well_formed_notes() {
        let entry = validate_entry(json!({
            "id": 1,
            "title": "groceries",
            "content": "buy milk",
            "createdAt": 1_700_000_000_000_i64,
            "updatedAt": 1_700_000_000_000_i64
        }));
        assert!(matches!(entry, ListEntry::Note(note) if note.id == 1));
    }

    #[test]
    fn validate_entry_flags_entries_without_identifier() {
        let entry = validate_entry(json!({"title": "no id", "content": "x"}));
        assert_eq!(entry, ListEntry::Malformed);
    }

    #[test]
    fn validate_entry_flags_non_object_entries() {
        assert_eq!(validate_entry(json!(42)), ListEntry::Malformed);
        assert_eq!(validate_entry(json!(null)), ListEntry::Malformed);
    }
}
