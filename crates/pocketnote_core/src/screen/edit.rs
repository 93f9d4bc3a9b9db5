//! Edit screen controller.
//!
//! # Responsibility
//! - Own the ephemeral draft while the edit form is open.
//! - Run validation on save and carry per-field errors back to the form.
//!
//! # Invariants
//! - The draft never reaches the store without passing validation.
//! - A failed save mutates neither store nor navigator; the draft and its
//!   errors stay on screen.
//! - Cancel/back discards the draft without trace.

use crate::model::note::{Note, NoteId};
use crate::nav::navigator::EditMode;
use crate::store::note_store::{NoteStore, StoreError};
use crate::validate::{validate, DraftErrors, NoteDraft};

/// Result of one save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Store mutated; the saved record is returned read-back style.
    Saved(Note),
    /// Validation failed; per-field errors recorded, nothing mutated.
    Invalid(DraftErrors),
    /// Existing-mode target vanished from the store before the save.
    Missing(NoteId),
}

/// Form state for the edit screen, in "new" or "existing" mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditScreen {
    mode: EditMode,
    draft: NoteDraft,
    errors: DraftErrors,
}

impl EditScreen {
    /// Opens the form empty, in "new note" mode.
    pub fn open_new() -> Self {
        Self {
            mode: EditMode::New,
            draft: NoteDraft::empty(),
            errors: DraftErrors::default(),
        }
    }

    /// Opens the form pre-filled from an existing note.
    pub fn open_existing(note: &Note) -> Self {
        Self {
            mode: EditMode::Existing(note.id),
            draft: NoteDraft::from_existing(note.title.clone(), note.content.clone()),
            errors: DraftErrors::default(),
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    /// Errors from the most recent save attempt, if any.
    pub fn errors(&self) -> &DraftErrors {
        &self.errors
    }

    /// Replaces the draft title. No validation runs on keystrokes.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    /// Replaces the draft content. No validation runs on keystrokes.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    /// Validates the draft and, if valid, commits it to the store.
    pub fn save(&mut self, store: &mut NoteStore) -> SaveOutcome {
        let verdict = validate(&self.draft);
        if !verdict.is_ok() {
            self.errors = verdict;
            return SaveOutcome::Invalid(verdict);
        }

        match self.mode {
            EditMode::New => {
                let note = store.create(self.draft.title.clone(), self.draft.content.clone());
                SaveOutcome::Saved(note)
            }
            EditMode::Existing(id) => {
                match store.update(id, self.draft.title.clone(), self.draft.content.clone()) {
                    Ok(note) => SaveOutcome::Saved(note),
                    Err(StoreError::NotFound(id)) => SaveOutcome::Missing(id),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EditScreen, SaveOutcome};
    use crate::store::note_store::NoteStore;

    #[test]
    fn invalid_save_keeps_errors_and_store_untouched() {
        let mut store = NoteStore::new();
        let mut screen = EditScreen::open_new();
        screen.set_title("Hi");
        screen.set_content("ok");

        let outcome = screen.save(&mut store);
        assert!(matches!(outcome, SaveOutcome::Invalid(_)));
        assert!(store.is_empty());
        assert!(screen.errors().title_error.is_some());
    }

    #[test]
    fn valid_save_in_new_mode_creates_note() {
        let mut store = NoteStore::new();
        let mut screen = EditScreen::open_new();
        screen.set_title("Groceries");
        screen.set_content("Milk, eggs");

        match screen.save(&mut store) {
            SaveOutcome::Saved(note) => {
                assert_eq!(store.find(note.id).unwrap().title, "Groceries");
            }
            other => panic!("expected Saved, got {other:?}"),
        }
    }

    #[test]
    fn existing_mode_save_against_deleted_note_reports_missing() {
        let mut store = NoteStore::new();
        let note = store.create("Groceries", "Milk, eggs");
        let mut screen = EditScreen::open_existing(&note);
        store.remove(note.id);

        screen.set_content("Milk, eggs, butter");
        let outcome = screen.save(&mut store);
        assert_eq!(outcome, SaveOutcome::Missing(note.id));
        assert!(store.is_empty());
    }
}
