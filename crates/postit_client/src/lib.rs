//! Client crate for the Post-It notes service: HTTP API wrapper and the
//! rendering-agnostic controller state machine.

pub mod api;
pub mod controller;

pub use api::{
    default_base_url, ClientError, ClientErrorKind, ClientResult, HttpNotesApi, ListEntry,
    NotesApi, DEFAULT_API_URL,
};
pub use controller::{ControllerState, NotesController, ViewState};
