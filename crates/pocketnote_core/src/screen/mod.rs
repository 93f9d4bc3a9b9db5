//! Screen controllers and the session that coordinates them.
//!
//! # Responsibility
//! - Translate user gestures into store mutations and navigator transitions.
//! - Re-read post-mutation state and hand it to the presentation layer.
//!
//! # Invariants
//! - Rendering happens synchronously after every handled gesture and always
//!   observes post-mutation state.
//! - The presentation layer is reached only through the `Renderer` trait.

pub mod detail;
pub mod edit;
pub mod list;
pub mod session;

use crate::model::note::Note;
use crate::validate::{DraftErrors, NoteDraft};
use list::NoteRow;

/// Presentation boundary consumed by the session.
///
/// Implementations decide how state looks; the core only decides what is
/// visible. Rendering must not mutate core state.
pub trait Renderer {
    /// Shows the note list, one row per stored note in creation order.
    fn show_list(&mut self, rows: &[NoteRow]);
    /// Shows one resolved note in full.
    fn show_detail(&mut self, note: &Note);
    /// Shows the edit form with the current draft and any save errors.
    fn show_edit(&mut self, draft: &NoteDraft, errors: &DraftErrors);
}
