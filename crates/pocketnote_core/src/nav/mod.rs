//! Screen navigation state.
//!
//! # Responsibility
//! - Own the frame stack that decides which screen is active.
//! - Keep routing strongly typed; no string route matching.
//!
//! # Invariants
//! - The stack always holds at least the root `List` frame.

pub mod navigator;
