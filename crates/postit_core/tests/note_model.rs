use postit_core::{NewNote, Note, NoteValidationError, DEFAULT_NOTE_TITLE};

#[test]
fn effective_title_prefers_trimmed_input() {
    let note = NewNote::new(Some("  shopping  ".to_string()), "buy milk");
    assert_eq!(note.effective_title(), "shopping");
}

#[test]
fn effective_title_falls_back_to_placeholder() {
    assert_eq!(
        NewNote::new(None, "body").effective_title(),
        DEFAULT_NOTE_TITLE
    );
    assert_eq!(
        NewNote::new(Some(String::new()), "body").effective_title(),
        DEFAULT_NOTE_TITLE
    );
    assert_eq!(
        NewNote::new(Some("   ".to_string()), "body").effective_title(),
        DEFAULT_NOTE_TITLE
    );
}

#[test]
fn validate_rejects_empty_content_only() {
    let empty = NewNote::new(None, "");
    assert_eq!(
        empty.validate().unwrap_err(),
        NoteValidationError::EmptyContent
    );

    let ok = NewNote::new(None, "x");
    assert!(ok.validate().is_ok());
}

#[test]
fn note_serializes_with_camel_case_timestamps() {
    let note = Note {
        id: 1,
        title: DEFAULT_NOTE_TITLE.to_string(),
        content: "buy milk".to_string(),
        created_at: 1_700_000_000_000,
        updated_at: 1_700_000_000_000,
    };

    let value = serde_json::to_value(&note).unwrap();
    assert_eq!(value["id"], 1);
    assert_eq!(value["title"], DEFAULT_NOTE_TITLE);
    assert_eq!(value["content"], "buy milk");
    assert_eq!(value["createdAt"], 1_700_000_000_000_i64);
    assert_eq!(value["updatedAt"], 1_700_000_000_000_i64);
    assert!(value.get("created_at").is_none());
}

#[test]
fn note_deserializes_from_wire_shape() {
    let json = r#"{
        "id": 7,
        "title": "groceries",
        "content": "buy milk",
        "createdAt": 1700000000000,
        "updatedAt": 1700000000000
    }"#;

    let note: Note = serde_json::from_str(json).unwrap();
    assert_eq!(note.id, 7);
    assert_eq!(note.title, "groceries");
    assert_eq!(note.created_at, 1_700_000_000_000);
}
