//! Domain model for session-scoped notes.
//!
//! # Responsibility
//! - Define the canonical note record used by store, screens and rendering.
//! - Own the timestamp convention (Unix epoch milliseconds).
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - `created_at` is immutable after construction; `updated_at >= created_at`.

pub mod note;
