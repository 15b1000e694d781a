//! CLI probe for the notes API.
//!
//! # Responsibility
//! - Drive the client controller against a running server.
//! - Keep output deterministic for quick local sanity checks.

use postit_client::{HttpNotesApi, ListEntry, NotesController, ViewState};
use std::env;

fn main() {
    if let Err(message) = run() {
        eprintln!("postit: {message}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let api = HttpNotesApi::new();

    match args.first().map(String::as_str) {
        Some("list") | None => cmd_list(api),
        Some("add") => cmd_add(api, &args[1..]),
        Some("delete") => cmd_delete(api, &args[1..]),
        Some("health") => cmd_health(&api),
        Some(other) => Err(format!(
            "unknown command `{other}`; expected list|add|delete|health"
        )),
    }
}

fn cmd_list(api: HttpNotesApi) -> Result<(), String> {
    let mut controller = NotesController::new(api);
    controller.refresh();
    print_list(&controller);
    Ok(())
}

fn cmd_add(api: HttpNotesApi, rest: &[String]) -> Result<(), String> {
    let content = rest
        .first()
        .ok_or_else(|| "usage: postit add <content> [title]".to_string())?;

    let mut controller = NotesController::new(api);
    controller.set_draft_content(content.clone());
    if let Some(title) = rest.get(1) {
        controller.set_draft_title(title.clone());
    }

    controller.submit();
    if let Some(alert) = controller.take_alert() {
        return Err(alert);
    }

    print_list(&controller);
    Ok(())
}

fn cmd_delete(api: HttpNotesApi, rest: &[String]) -> Result<(), String> {
    // An unparsable id goes through the controller's missing-id guard
    // instead of reaching the server.
    let id = rest.first().and_then(|raw| raw.parse().ok());

    let mut controller = NotesController::new(api);
    controller.delete(id);
    if let Some(alert) = controller.take_alert() {
        return Err(alert);
    }

    print_list(&controller);
    Ok(())
}

fn cmd_health(api: &HttpNotesApi) -> Result<(), String> {
    let body = api.health().map_err(|err| err.to_string())?;
    println!("{body}");
    Ok(())
}

fn print_list(controller: &NotesController<HttpNotesApi>) {
    match controller.view_state() {
        ViewState::Empty => println!("No notes yet. Add one above!"),
        ViewState::Loading => println!("Loading notes..."),
        ViewState::Notes => {
            for entry in &controller.state().entries {
                match entry {
                    ListEntry::Note(note) => {
                        println!("{}  {}: {}", note.id, note.title, note.content);
                    }
                    ListEntry::Malformed => println!("-  Invalid note data received."),
                }
            }
        }
    }
}
