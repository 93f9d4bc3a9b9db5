//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `pocketnote_core` linkage.
//! - Walk the three screens once with deterministic output for quick local
//!   sanity checks.

use pocketnote_core::{DraftErrors, Gesture, Note, NoteDraft, NoteRow, Renderer, Session};

/// Prints each screen as plain text; stands in for a real presentation
/// layer.
struct PlainTextRenderer;

impl Renderer for PlainTextRenderer {
    fn show_list(&mut self, rows: &[NoteRow]) {
        println!("[list] {} note(s)", rows.len());
        for row in rows {
            println!("  - {} | {}", row.title, row.preview);
        }
    }

    fn show_detail(&mut self, note: &Note) {
        println!("[detail] {}", note.title);
        println!("  {}", note.content);
    }

    fn show_edit(&mut self, draft: &NoteDraft, errors: &DraftErrors) {
        println!("[edit] title={:?}", draft.title);
        if let Some(message) = errors.title_error {
            println!("  ! {message}");
        }
        if let Some(message) = errors.content_error {
            println!("  ! {message}");
        }
    }
}

fn main() {
    println!("pocketnote_core version={}", pocketnote_core::core_version());

    let mut session = Session::new(PlainTextRenderer);
    session.render();

    // Create a note, rejecting a too-short title first.
    session.handle(Gesture::TapAdd);
    session.handle(Gesture::SetTitle("Hi".to_string()));
    session.handle(Gesture::SetContent("ok".to_string()));
    session.handle(Gesture::TapSave);
    session.handle(Gesture::SetTitle("Groceries".to_string()));
    session.handle(Gesture::SetContent("Milk, eggs".to_string()));
    session.handle(Gesture::TapSave);

    // View and edit it, then come back to the list.
    let id = session.store().list()[0].id;
    session.handle(Gesture::TapRow(id));
    session.handle(Gesture::TapEdit);
    session.handle(Gesture::SetContent("Milk, eggs, butter".to_string()));
    session.handle(Gesture::TapSave);
    session.handle(Gesture::TapBack);

    // And delete it again.
    session.handle(Gesture::TapDelete(id));
}
