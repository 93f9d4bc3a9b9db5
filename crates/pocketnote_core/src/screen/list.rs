//! List screen projection.
//!
//! # Responsibility
//! - Project stored notes into render-ready rows.
//! - Derive a single-line content preview for each row.
//!
//! # Invariants
//! - Row order equals store order (creation order).
//! - Preview text is whitespace-normalized and capped at
//!   `PREVIEW_MAX_CHARS` scalar values.

use crate::model::note::{Note, NoteId};
use crate::store::note_store::NoteStore;
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum preview length in Unicode scalar values.
pub const PREVIEW_MAX_CHARS: usize = 80;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// One render-ready list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRow {
    pub id: NoteId,
    pub title: String,
    /// Single-line content excerpt for the row subtitle.
    pub preview: String,
    /// Epoch ms of the last edit, for display-side date formatting.
    pub updated_at: i64,
}

impl NoteRow {
    fn from_note(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            preview: derive_preview(&note.content),
            updated_at: note.updated_at,
        }
    }
}

/// Projects the whole store into list rows, preserving creation order.
pub fn rows(store: &NoteStore) -> Vec<NoteRow> {
    store.list().iter().map(NoteRow::from_note).collect()
}

/// Collapses whitespace runs to single spaces and caps the length.
pub fn derive_preview(content: &str) -> String {
    let normalized = WHITESPACE_RE.replace_all(content, " ");
    normalized.trim().chars().take(PREVIEW_MAX_CHARS).collect()
}
