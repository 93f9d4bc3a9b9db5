//! In-memory note storage.
//!
//! # Responsibility
//! - Own the ordered collection of notes for the running session.
//! - Return semantic errors (`NotFound`) instead of panicking on bad ids.
//!
//! # Invariants
//! - Store contents only ever hold validation-passing notes; callers
//!   validate drafts before mutating.
//! - Iteration order is creation order and is stable across updates.

pub mod note_store;
