//! Ordered in-memory note store.
//!
//! # Responsibility
//! - Provide `list`/`create`/`update`/`remove`/`find` over session notes.
//! - Guarantee id uniqueness and timestamp invariants on every mutation.
//!
//! # Invariants
//! - `create` appends; `list` reflects creation order with no re-sort.
//! - `update` preserves `id`/`created_at` and never moves `updated_at`
//!   backwards.
//! - `remove` of an absent id is a no-op, not an error.

use crate::model::note::{Note, NoteId};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for note mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Target note does not exist in this session.
    NotFound(NoteId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "note not found: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Session-scoped, single-writer note collection.
///
/// Mutations take `&mut self`, so a read observed after a mutation is
/// sequenced behind it by construction; no internal locking exists or is
/// needed.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All notes in creation order. Side-effect free.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    /// Number of notes currently stored.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns whether the store holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Appends a new note and returns a copy of the stored record.
    ///
    /// Validation is the caller's responsibility; this operation always
    /// succeeds.
    pub fn create(&mut self, title: impl Into<String>, content: impl Into<String>) -> Note {
        let note = Note::new(title, content);
        debug!(
            "event=note_created module=store status=ok id={} title_chars={}",
            note.id,
            note.title.chars().count()
        );
        self.notes.push(note.clone());
        note
    }

    /// Replaces title/content of the note with `id`, refreshing
    /// `updated_at`.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no note has `id`; the store is left
    ///   unchanged.
    pub fn update(
        &mut self,
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> StoreResult<Note> {
        let note = self
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(StoreError::NotFound(id))?;
        note.apply_edit(title, content);
        debug!("event=note_updated module=store status=ok id={id}");
        Ok(note.clone())
    }

    /// Removes the note with `id` if present. Absence is a no-op.
    pub fn remove(&mut self, id: NoteId) {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() != before {
            debug!("event=note_removed module=store status=ok id={id}");
        }
    }

    /// Read-only lookup by id.
    pub fn find(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::{NoteStore, StoreError};
    use uuid::Uuid;

    #[test]
    fn create_then_find_roundtrip() {
        let mut store = NoteStore::new();
        let note = store.create("Groceries", "Milk, eggs");

        let found = store.find(note.id).unwrap();
        assert_eq!(found.title, "Groceries");
        assert_eq!(found.content, "Milk, eggs");
    }

    #[test]
    fn update_unknown_id_leaves_store_unchanged() {
        let mut store = NoteStore::new();
        store.create("Groceries", "Milk, eggs");

        let missing = Uuid::new_v4();
        let err = store.update(missing, "x", "y").unwrap_err();
        assert_eq!(err, StoreError::NotFound(missing));
        assert_eq!(store.list()[0].title, "Groceries");
    }

    #[test]
    fn list_keeps_creation_order_after_update() {
        let mut store = NoteStore::new();
        let first = store.create("First note", "a");
        let second = store.create("Second note", "b");

        store.update(first.id, "First note", "edited").unwrap();

        let ids: Vec<_> = store.list().iter().map(|note| note.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }
}
