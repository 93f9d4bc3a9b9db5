//! Frame-stack navigator.
//!
//! # Responsibility
//! - Model the three-screen flow as a finite-state stack of typed frames.
//! - Provide push/pop/pop-to-root transitions for the screen controllers.
//!
//! # Invariants
//! - Initial state is a single `List` frame.
//! - Popping the root `List` frame is a no-op; the stack never underflows.
//! - Frames are only mutated through the transition methods below.

use crate::model::note::NoteId;
use log::warn;

/// Discriminates the "new note" form from editing an existing note.
///
/// A mode tag rather than a sentinel id value, so collision with generated
/// ids is structurally impossible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    New,
    Existing(NoteId),
}

/// One entry in the navigation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    List,
    Detail(NoteId),
    Edit(EditMode),
}

/// Stack-based router over the three screens.
#[derive(Debug)]
pub struct Navigator {
    stack: Vec<Frame>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Starts at the root `List` frame.
    pub fn new() -> Self {
        Self {
            stack: vec![Frame::List],
        }
    }

    /// The active frame. The stack is never empty, so this always resolves.
    pub fn current(&self) -> Frame {
        *self
            .stack
            .last()
            .unwrap_or(&Frame::List)
    }

    /// Current stack depth; at least 1.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Pushes the detail screen for one note.
    pub fn open_detail(&mut self, id: NoteId) {
        self.stack.push(Frame::Detail(id));
    }

    /// Pushes the edit screen in "new note" mode.
    pub fn open_new(&mut self) {
        self.stack.push(Frame::Edit(EditMode::New));
    }

    /// Pushes the edit screen for the note shown by the current detail
    /// frame. Logged and ignored when the active frame is not a detail.
    pub fn open_edit(&mut self) {
        match self.current() {
            Frame::Detail(id) => self.stack.push(Frame::Edit(EditMode::Existing(id))),
            other => warn!(
                "event=open_edit_ignored module=nav status=noop frame={other:?}"
            ),
        }
    }

    /// Pops one frame. At the root `List` frame this is a no-op.
    pub fn back(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Pops one frame after a successful save. Same stack effect as
    /// `back`; saving from `Edit(Existing(id))` therefore lands on
    /// `Detail(id)`.
    pub fn save_completed(&mut self) {
        self.back();
    }

    /// Drops every frame above the root `List`. Used when a detail frame
    /// references a note that no longer resolves.
    pub fn pop_to_root(&mut self) {
        self.stack.truncate(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{EditMode, Frame, Navigator};
    use uuid::Uuid;

    #[test]
    fn starts_at_list_and_cannot_underflow() {
        let mut nav = Navigator::new();
        assert_eq!(nav.current(), Frame::List);

        nav.back();
        nav.back();
        assert_eq!(nav.current(), Frame::List);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn detail_then_edit_builds_expected_stack() {
        let id = Uuid::new_v4();
        let mut nav = Navigator::new();
        nav.open_detail(id);
        nav.open_edit();

        assert_eq!(nav.current(), Frame::Edit(EditMode::Existing(id)));
        assert_eq!(nav.depth(), 3);

        nav.save_completed();
        assert_eq!(nav.current(), Frame::Detail(id));
    }

    #[test]
    fn open_edit_outside_detail_is_ignored() {
        let mut nav = Navigator::new();
        nav.open_edit();
        assert_eq!(nav.current(), Frame::List);
    }

    #[test]
    fn pop_to_root_clears_everything_above_list() {
        let mut nav = Navigator::new();
        nav.open_detail(Uuid::new_v4());
        nav.open_edit();
        nav.pop_to_root();
        assert_eq!(nav.current(), Frame::List);
        assert_eq!(nav.depth(), 1);
    }
}
