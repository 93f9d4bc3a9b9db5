//! Gesture-driven session coordinator.
//!
//! # Responsibility
//! - Dispatch each gesture to the controller of the active frame.
//! - Render synchronously after every handled gesture.
//!
//! # Invariants
//! - Store and navigator are mutated only from gesture handling; the
//!   session is the single writer.
//! - A stale detail frame is popped to the root list before anything is
//!   rendered for it.
//! - Gestures that do not apply to the active screen are logged and
//!   ignored, never panicked on.

use crate::model::note::NoteId;
use crate::nav::navigator::{Frame, Navigator};
use crate::screen::edit::{EditScreen, SaveOutcome};
use crate::screen::{detail, list, Renderer};
use crate::store::note_store::NoteStore;
use crate::validate::{DraftErrors, NoteDraft};
use log::{info, warn};

/// Complete set of actions the presentation layer may deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    /// List: open the detail screen for one row.
    TapRow(NoteId),
    /// List: open the empty "new note" form.
    TapAdd,
    /// List: delete one row outright. No confirmation step exists.
    TapDelete(NoteId),
    /// Detail: open the edit form for the shown note.
    TapEdit,
    /// Any screen: pop one frame; discards the draft on the edit screen.
    TapBack,
    /// Edit: replace the draft title.
    SetTitle(String),
    /// Edit: replace the draft content.
    SetContent(String),
    /// Edit: validate and commit the draft.
    TapSave,
}

/// One running note-taking session: store, navigator, active edit form and
/// the renderer they feed.
pub struct Session<R: Renderer> {
    store: NoteStore,
    navigator: Navigator,
    edit: Option<EditScreen>,
    renderer: R,
}

impl<R: Renderer> Session<R> {
    /// Starts an empty session at the list screen.
    pub fn new(renderer: R) -> Self {
        Self {
            store: NoteStore::new(),
            navigator: Navigator::new(),
            edit: None,
            renderer,
        }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Host-shell access for out-of-band store mutations; the next render
    /// re-reads the store, so stale frames are reconciled then.
    pub fn store_mut(&mut self) -> &mut NoteStore {
        &mut self.store
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The active edit form, when the edit screen is open.
    pub fn edit_screen(&self) -> Option<&EditScreen> {
        self.edit.as_ref()
    }

    /// Handles one gesture and renders the post-mutation state.
    pub fn handle(&mut self, gesture: Gesture) {
        match (self.navigator.current(), gesture) {
            (Frame::List, Gesture::TapRow(id)) => {
                if self.store.find(id).is_some() {
                    self.navigator.open_detail(id);
                } else {
                    warn!("event=tap_row_stale module=session status=noop id={id}");
                }
            }
            (Frame::List, Gesture::TapAdd) => {
                self.edit = Some(EditScreen::open_new());
                self.navigator.open_new();
            }
            (Frame::List, Gesture::TapDelete(id)) => {
                self.store.remove(id);
            }
            (Frame::Detail(_), Gesture::TapBack) => {
                self.navigator.back();
            }
            (Frame::Detail(id), Gesture::TapEdit) => {
                if let Some(note) = detail::resolve(&self.store, id) {
                    self.edit = Some(EditScreen::open_existing(note));
                    self.navigator.open_edit();
                }
                // A stale frame falls through to the render-time redirect.
            }
            (Frame::Edit(_), Gesture::SetTitle(title)) => {
                if let Some(screen) = self.edit.as_mut() {
                    screen.set_title(title);
                }
            }
            (Frame::Edit(_), Gesture::SetContent(content)) => {
                if let Some(screen) = self.edit.as_mut() {
                    screen.set_content(content);
                }
            }
            (Frame::Edit(_), Gesture::TapBack) => {
                self.edit = None;
                self.navigator.back();
            }
            (Frame::Edit(_), Gesture::TapSave) => self.save_draft(),
            (Frame::List, Gesture::TapBack) => {
                // Root frame; back is a no-op by the stack floor rule.
            }
            (frame, gesture) => {
                warn!(
                    "event=gesture_ignored module=session status=noop frame={frame:?} gesture={gesture:?}"
                );
            }
        }
        self.render();
    }

    fn save_draft(&mut self) {
        let Some(screen) = self.edit.as_mut() else {
            warn!("event=save_without_draft module=session status=noop");
            return;
        };
        match screen.save(&mut self.store) {
            SaveOutcome::Saved(note) => {
                info!("event=draft_saved module=session status=ok id={}", note.id);
                self.edit = None;
                self.navigator.save_completed();
            }
            SaveOutcome::Invalid(_) => {
                // Errors stay on the screen; store and navigator untouched.
            }
            SaveOutcome::Missing(id) => {
                warn!("event=save_target_missing module=session status=noop id={id}");
                self.edit = None;
                self.navigator.pop_to_root();
            }
        }
    }

    /// Renders the current top frame. Public so the host can draw the
    /// initial screen and redraw after out-of-band store changes.
    pub fn render(&mut self) {
        self.reconcile_stale_detail();
        match self.navigator.current() {
            Frame::List => self.renderer.show_list(&list::rows(&self.store)),
            Frame::Detail(id) => {
                // Reconciliation above guarantees resolution here.
                if let Some(note) = detail::resolve(&self.store, id) {
                    self.renderer.show_detail(note);
                }
            }
            Frame::Edit(_) => match self.edit.as_ref() {
                Some(screen) => self.renderer.show_edit(screen.draft(), screen.errors()),
                None => {
                    warn!("event=edit_frame_without_draft module=session status=noop");
                    self.renderer
                        .show_edit(&NoteDraft::empty(), &DraftErrors::default());
                }
            },
        }
    }

    /// Pops stale detail frames so an unresolvable note never renders.
    fn reconcile_stale_detail(&mut self) {
        if let Frame::Detail(id) = self.navigator.current() {
            if self.store.find(id).is_none() {
                warn!("event=stale_detail_redirect module=session status=noop id={id}");
                self.navigator.pop_to_root();
            }
        }
    }
}
