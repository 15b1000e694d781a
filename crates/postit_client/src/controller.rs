//! Client-side note controller state machine.
//!
//! # Responsibility
//! - Own the UI state (notes list, draft fields, loading flag, alert).
//! - Mutate it only through named transitions, independent of any
//!   rendering layer.
//!
//! # Invariants
//! - The list is always replaced with the server's ordered snapshot
//!   after a mutation; no optimistic insert, no client-side re-sort.
//! - Fetch failures are logged, never alerted, and preserve the last
//!   known-good list.
//! - Submit and delete are guarded locally before any request is issued.

use crate::api::{ClientError, ListEntry, NotesApi};
use log::{info, warn};
use postit_core::{Note, NoteId};

/// Primary view states derived from controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// A list request is in flight.
    Loading,
    /// Loaded, nothing to show.
    Empty,
    /// Loaded with at least one entry.
    Notes,
}

/// Everything a rendering layer needs, owned in one place.
#[derive(Debug, Clone, Default)]
pub struct ControllerState {
    /// Server snapshot, newest first, malformed entries kept as
    /// placeholders.
    pub entries: Vec<ListEntry>,
    /// Draft title text, held independently of the fetched list.
    pub draft_title: String,
    /// Draft content text.
    pub draft_content: String,
    /// Whether a list request is in flight.
    pub loading: bool,
    /// Last user-facing alert, if any. Consumed via `take_alert`.
    pub alert: Option<String>,
}

/// Controller mediating between user input and the notes API.
pub struct NotesController<A: NotesApi> {
    api: A,
    state: ControllerState,
}

impl<A: NotesApi> NotesController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ControllerState::default(),
        }
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Derives the primary view state.
    pub fn view_state(&self) -> ViewState {
        if self.state.loading {
            ViewState::Loading
        } else if self.state.entries.is_empty() {
            ViewState::Empty
        } else {
            ViewState::Notes
        }
    }

    /// Iterates the well-formed notes in display order.
    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.state.entries.iter().filter_map(ListEntry::note)
    }

    /// Takes and clears the pending alert, if any.
    pub fn take_alert(&mut self) -> Option<String> {
        self.state.alert.take()
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.state.draft_title = title.into();
    }

    pub fn set_draft_content(&mut self, content: impl Into<String>) {
        self.state.draft_content = content.into();
    }

    /// Mount-time load; also the convergence step after every mutation.
    pub fn refresh(&mut self) {
        self.fetch_start();
        match self.api.list_notes() {
            Ok(entries) => self.fetch_success(entries),
            Err(err) => self.fetch_error(&err),
        }
    }

    /// Submits the current draft as a new note.
    ///
    /// Empty (after trimming) draft content is rejected locally with an
    /// alert; no request is issued.
    pub fn submit(&mut self) {
        self.state.alert = None;

        if self.state.draft_content.trim().is_empty() {
            self.state.alert = Some("Note content cannot be empty!".to_string());
            return;
        }

        let title = Some(self.state.draft_title.clone());
        let content = self.state.draft_content.clone();
        match self.api.create_note(title, content) {
            Ok(note) => self.submit_success(&note),
            Err(err) => {
                warn!("event=note_submit module=controller status=error error={err}");
                self.state.alert = Some(err.message);
            }
        }
    }

    /// Deletes a note by id.
    ///
    /// A missing identifier is rejected locally with an alert; no
    /// request is issued.
    pub fn delete(&mut self, id: Option<NoteId>) {
        self.state.alert = None;

        let Some(id) = id else {
            warn!("event=note_delete module=controller status=rejected reason=missing_id");
            self.state.alert =
                Some("Cannot delete note: id is missing. Refresh and try again.".to_string());
            return;
        };

        match self.api.delete_note(id) {
            Ok(()) => self.delete_success(id),
            Err(err) => {
                warn!("event=note_delete module=controller status=error id={id} error={err}");
                self.state.alert = Some(err.message);
            }
        }
    }

    fn fetch_start(&mut self) {
        self.state.loading = true;
    }

    fn fetch_success(&mut self, entries: Vec<ListEntry>) {
        self.state.loading = false;
        self.state.entries = entries;
    }

    fn fetch_error(&mut self, err: &ClientError) {
        self.state.loading = false;
        // Keep the last known-good list; a transient fetch failure must
        // not masquerade as an empty store.
        warn!("event=notes_fetch module=controller status=error error={err}");
    }

    fn submit_success(&mut self, note: &Note) {
        info!(
            "event=note_submit module=controller status=ok id={}",
            note.id
        );
        self.state.draft_title.clear();
        self.state.draft_content.clear();
        self.refresh();
    }

    fn delete_success(&mut self, id: NoteId) {
        info!("event=note_delete module=controller status=ok id={id}");
        self.refresh();
    }
}
