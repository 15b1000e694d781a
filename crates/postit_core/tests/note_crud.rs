use postit_core::db::open_db_in_memory;
use postit_core::{
    NewNote, NoteRepository, NoteService, NoteValidationError, RepoError, SqliteNoteRepository,
    DEFAULT_NOTE_TITLE,
};

#[test]
fn create_and_list_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let created = repo
        .create_note(&NewNote::new(Some("groceries".to_string()), "buy milk"))
        .unwrap();
    assert_eq!(created.title, "groceries");
    assert_eq!(created.content, "buy milk");
    assert!(created.id > 0);
    assert!(created.created_at > 0);
    assert_eq!(created.created_at, created.updated_at);

    // List returns exactly the fields create reported; there is no update
    // path that could make them diverge.
    let listed = repo.list_notes().unwrap();
    assert_eq!(listed, vec![created]);
}

#[test]
fn create_without_title_applies_placeholder() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let created = repo.create_note(&NewNote::new(None, "buy milk")).unwrap();
    assert_eq!(created.title, DEFAULT_NOTE_TITLE);

    let blank = repo
        .create_note(&NewNote::new(Some("   ".to_string()), "water plants"))
        .unwrap();
    assert_eq!(blank.title, DEFAULT_NOTE_TITLE);
}

#[test]
fn create_with_empty_content_fails_and_persists_nothing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let err = repo
        .create_note(&NewNote::new(Some("title".to_string()), ""))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(NoteValidationError::EmptyContent)
    ));

    assert!(repo.list_notes().unwrap().is_empty());
}

#[test]
fn list_returns_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let first = repo.create_note(&NewNote::new(None, "note a")).unwrap();
    let second = repo.create_note(&NewNote::new(None, "note b")).unwrap();

    // Same-millisecond inserts rely on the id tiebreak.
    let listed = repo.list_notes().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
}

#[test]
fn list_orders_by_creation_time_before_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let old = repo.create_note(&NewNote::new(None, "backdated")).unwrap();
    let recent = repo.create_note(&NewNote::new(None, "recent")).unwrap();

    conn.execute(
        "UPDATE notes SET created_at = created_at - 60000 WHERE id = ?1;",
        [old.id],
    )
    .unwrap();

    let listed = repo.list_notes().unwrap();
    assert_eq!(listed[0].id, recent.id);
    assert_eq!(listed[1].id, old.id);
}

#[test]
fn list_on_empty_store_returns_empty_vec() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    assert!(repo.list_notes().unwrap().is_empty());
}

#[test]
fn delete_existing_note_removes_exactly_one_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let keep = repo.create_note(&NewNote::new(None, "keep me")).unwrap();
    let gone = repo.create_note(&NewNote::new(None, "delete me")).unwrap();

    assert!(repo.delete_note(gone.id).unwrap());

    let listed = repo.list_notes().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, keep.id);
}

#[test]
fn delete_missing_note_reports_false_and_changes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let note = repo.create_note(&NewNote::new(None, "survivor")).unwrap();

    assert!(!repo.delete_note(note.id + 1000).unwrap());
    assert_eq!(repo.list_notes().unwrap().len(), 1);
}

#[test]
fn ids_are_not_reused_after_delete() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let first = repo.create_note(&NewNote::new(None, "ephemeral")).unwrap();
    assert!(repo.delete_note(first.id).unwrap());

    let second = repo.create_note(&NewNote::new(None, "successor")).unwrap();
    assert!(second.id > first.id);
}

#[test]
fn service_applies_title_default_and_delegates() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let created = service.create_note(None, "buy milk").unwrap();
    assert_eq!(created.title, DEFAULT_NOTE_TITLE);

    assert_eq!(service.list_notes().unwrap().len(), 1);
    assert!(service.delete_note(created.id).unwrap());
    assert!(!service.delete_note(created.id).unwrap());
    assert!(service.list_notes().unwrap().is_empty());
}

#[test]
fn service_rejects_empty_content() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let err = service.create_note(Some("title".to_string()), "").unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(service.list_notes().unwrap().is_empty());
}
