//! Draft validation for the edit form.
//!
//! # Responsibility
//! - Map a candidate title/content pair to per-field error messages.
//! - Keep validation pure and deterministic; no store access, no clock.
//!
//! # Invariants
//! - Title and content rules are evaluated independently; both may fire.
//! - Lengths are Unicode scalar counts, not byte lengths.

use serde::{Deserialize, Serialize};

/// Minimum title length accepted on save.
pub const TITLE_MIN_CHARS: usize = 3;
/// Maximum title length accepted on save.
pub const TITLE_MAX_CHARS: usize = 50;
/// Maximum content length accepted on save.
pub const CONTENT_MAX_CHARS: usize = 500;

/// Ephemeral, unvalidated form state owned by the edit screen.
///
/// A draft is not a note: it is discarded on cancel or back navigation and
/// only reaches the store through a validation-passing save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    /// Empty draft for the "new note" form.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Draft pre-filled from an existing title/content pair.
    pub fn from_existing(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Per-field validation verdict for one save attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DraftErrors {
    pub title_error: Option<&'static str>,
    pub content_error: Option<&'static str>,
}

impl DraftErrors {
    /// Overall validity: both field errors absent.
    pub fn is_ok(&self) -> bool {
        self.title_error.is_none() && self.content_error.is_none()
    }
}

/// Validates one draft, returning per-field messages.
///
/// Re-run on every save attempt, never on keystrokes.
pub fn validate(draft: &NoteDraft) -> DraftErrors {
    DraftErrors {
        title_error: title_error(&draft.title),
        content_error: content_error(&draft.content),
    }
}

fn title_error(title: &str) -> Option<&'static str> {
    let chars = title.chars().count();
    if chars == 0 {
        Some("Title cannot be empty")
    } else if chars < TITLE_MIN_CHARS {
        Some("Title must be at least 3 characters")
    } else if chars > TITLE_MAX_CHARS {
        Some("Title must be at most 50 characters")
    } else {
        None
    }
}

fn content_error(content: &str) -> Option<&'static str> {
    let chars = content.chars().count();
    if chars == 0 {
        Some("Content cannot be empty")
    } else if chars > CONTENT_MAX_CHARS {
        Some("Content must be at most 500 characters")
    } else {
        None
    }
}
