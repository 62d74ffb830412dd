//! Keyboard and mouse input handling.
//!
//! Maps terminal events to state-machine actions or app commands.  Only
//! key *press* events count (release and repeat are ignored), so each
//! physical keystroke produces exactly one action.
//!
//! ## For contributors
//!
//! To add a new keybinding:
//!
//! 1. Add an [`Action`] variant (or an `App` field) for the behavior.
//! 2. Add a `KeyCode` match arm in [`handle_key_event`].
//! 3. Update the help text in [`crate::ui`]'s status bar.

use std::path::Path;
use std::sync::mpsc;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::App;
use crate::export;
use crate::state::Action;

/// Process a single key event, updating app state accordingly.
pub fn handle_key_event(app: &mut App, key: KeyEvent, wake: &mpsc::Sender<()>) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,

        KeyCode::Up | KeyCode::Char('k') => app.dispatch(Action::NavUp),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch(Action::NavDown),

        // First/last jumps go through NavSelect, which trusts its caller:
        // the guards here are what keep the index valid.
        KeyCode::Home | KeyCode::Char('g') => {
            if !app.state.current_list().is_empty() {
                app.dispatch(Action::NavSelect(0));
            }
        }
        KeyCode::End | KeyCode::Char('G') => {
            let len = app.state.current_list().len();
            if len > 0 {
                app.dispatch(Action::NavSelect(len - 1));
            }
        }

        KeyCode::Enter | KeyCode::Char('f') => app.dispatch(Action::FollowPrimary),
        KeyCode::Char('c') => app.dispatch(Action::FollowSecondary),
        KeyCode::Char('x') => app.dispatch(Action::DismissStory),
        KeyCode::Char('v') => app.dispatch(Action::ToggleView),
        KeyCode::Char('a') => app.dispatch(Action::DismissAlert),

        KeyCode::Char('r') => {
            // Wake the poller; results come back through the poll channel.
            if wake.send(()).is_ok() {
                app.status = "Refreshing…".into();
            }
        }

        KeyCode::Char('e') => {
            match export::export_active_stories(app.storage(), Path::new(".")) {
                Ok(path) => app.status = format!("Exported to {}", path.display()),
                Err(e) => app.status = format!("Export failed: {e}"),
            }
        }

        _ => {}
    }
}

/// Process a single mouse event: a left click on a visible row selects it.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if let Some(index) = app.row_at(mouse.column, mouse.row) {
        app.dispatch(Action::NavSelect(index));
    }
}
