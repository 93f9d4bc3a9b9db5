//! Note domain model.
//!
//! # Responsibility
//! - Define the validated note record held by the store.
//! - Provide constructors that stamp identity and timestamps exactly once.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `created_at` never changes after construction.
//! - `updated_at` is always `>= created_at`.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for every stored note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// A validated, session-lifetime note record.
///
/// Only validation-passing state ever reaches a `Note`; unvalidated form
/// input lives in `NoteDraft` and is discarded on cancel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable global ID used for navigation parameters and lookups.
    pub id: NoteId,
    /// Short title, 3-50 characters once validated.
    pub title: String,
    /// Body text, 1-500 characters once validated.
    pub content: String,
    /// Unix epoch milliseconds, set once at creation.
    pub created_at: i64,
    /// Unix epoch milliseconds, refreshed on every successful edit.
    pub updated_at: i64,
}

impl Note {
    /// Creates a new note with a generated stable ID and both timestamps
    /// stamped to the current time.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = now_epoch_ms();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces title and content, refreshing `updated_at`.
    ///
    /// # Invariants
    /// - `id` and `created_at` are untouched.
    /// - `updated_at` never moves backwards, even if the wall clock does.
    pub fn apply_edit(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.title = title.into();
        self.content = content.into();
        self.updated_at = now_epoch_ms().max(self.updated_at);
    }
}

/// Current wall-clock time as Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
