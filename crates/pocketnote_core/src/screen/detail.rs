//! Detail screen resolution.
//!
//! # Responsibility
//! - Resolve the note referenced by a detail frame's parameter.
//!
//! # Invariants
//! - Resolution is read-only; a stale reference is the session's problem to
//!   redirect, never an error surfaced to the user.

use crate::model::note::{Note, NoteId};
use crate::store::note_store::NoteStore;

/// Looks up the note a detail frame points at.
///
/// `None` means the frame is stale (the note was deleted after the frame
/// was pushed) and the session must pop back to the list.
pub fn resolve(store: &NoteStore, id: NoteId) -> Option<&Note> {
    store.find(id)
}
