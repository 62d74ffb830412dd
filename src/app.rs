//! Application driver.
//!
//! [`App`] owns the current [`TriageState`] and everything around it: the
//! storage handle, the opener, the status line, and the scroll bookkeeping
//! for the rendered list.  All state changes go through [`App::dispatch`],
//! which also writes the snapshot whenever a transition touched either
//! story list — navigation and view changes never hit the disk.

use anyhow::Result;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;

use crate::opener::Opener;
use crate::state::{apply, Action, TriageState};
use crate::storage::{Snapshot, Storage};

pub struct App {
    /// Current machine state.  Mutated only through [`App::dispatch`].
    pub state: TriageState,
    storage: Storage,
    opener: Box<dyn Opener>,
    /// Scroll/highlight bookkeeping for the rendered list.
    pub list_state: ListState,
    /// Screen region the list occupied on the last draw, for click mapping.
    pub list_area: Rect,
    /// Whether the user has requested to quit.
    pub quit: bool,
    /// Last status message (fetch results, save failures, export paths).
    pub status: String,
}

impl App {
    /// Build the app from whatever the storage holds.
    pub fn new(storage: Storage, opener: Box<dyn Opener>) -> Self {
        let snapshot = storage.load();
        let state = TriageState::with_lists(snapshot.stories, snapshot.dismissed_stories);
        let mut list_state = ListState::default();
        list_state.select(Some(state.selected_index));
        Self {
            state,
            storage,
            opener,
            list_state,
            list_area: Rect::default(),
            quit: false,
            status: "Starting…".into(),
        }
    }

    /// Run one action through the state machine.
    pub fn dispatch(&mut self, action: Action) {
        let next = apply(&self.state, action, self.opener.as_ref());
        let lists_changed = next.active_stories != self.state.active_stories
            || next.dismissed_stories != self.state.dismissed_stories;
        self.state = next;
        self.list_state.select(Some(self.state.selected_index));
        if lists_changed {
            if let Err(e) = self.save() {
                self.status = format!("Save failed: {e}");
            }
        }
    }

    fn save(&self) -> Result<()> {
        self.storage.save(&Snapshot {
            stories: self.state.active_stories.clone(),
            dismissed_stories: self.state.dismissed_stories.clone(),
        })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Map a click at screen coordinates to a list row.
    ///
    /// Returns `None` outside the list's interior (the block border doesn't
    /// count) or below the last story.  The returned index is valid for the
    /// current list, so it can feed [`Action::NavSelect`] directly.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.list_area;
        if column <= area.x || column + 1 >= area.x + area.width {
            return None;
        }
        if row <= area.y || row + 1 >= area.y + area.height {
            return None;
        }
        let index = self.list_state.offset() + usize::from(row - area.y - 1);
        (index < self.state.current_list().len()).then_some(index)
    }
}
