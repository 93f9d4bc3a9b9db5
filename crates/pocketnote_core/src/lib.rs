//! Core domain logic for Pocketnote.
//! This crate is the single source of truth for note and navigation invariants.

pub mod logging;
pub mod model;
pub mod nav;
pub mod screen;
pub mod store;
pub mod validate;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId};
pub use nav::navigator::{EditMode, Frame, Navigator};
pub use screen::edit::{EditScreen, SaveOutcome};
pub use screen::list::NoteRow;
pub use screen::session::{Gesture, Session};
pub use screen::Renderer;
pub use store::note_store::{NoteStore, StoreError, StoreResult};
pub use validate::{validate, DraftErrors, NoteDraft};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
