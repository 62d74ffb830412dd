//! The triage state machine.
//!
//! Every user command and every completed fetch becomes an [`Action`], and
//! [`apply`] folds actions into [`TriageState`] one at a time. The function
//! is total: every action has a defined result in every reachable state,
//! and nothing in here panics. It is also pure with respect to persistence
//! and rendering — callers observe the returned state to decide what to
//! draw and when to save. The injected [`Opener`] is the one collaborator,
//! and the machine only consumes its success boolean.

use crate::opener::Opener;
use crate::source::Story;

/// Upper bound on the dismissed archive. Oldest entries fall off the tail.
pub const KEEP_MAX_DISMISSED_STORIES: usize = 100;

/// Which list navigation and triage commands currently address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Active,
    Dismissed,
}

/// One discrete unit of input to the state machine.
#[derive(Debug, Clone)]
pub enum Action {
    NavUp,
    NavDown,
    /// Direct selection, e.g. from a pointer click or a first/last jump.
    ///
    /// The index is taken as-is, with no bounds clamp — callers are
    /// responsible for its validity.
    NavSelect(usize),
    /// Open the selected story's primary link.
    FollowPrimary,
    /// Open the selected story's comments link, when it has one.
    FollowSecondary,
    /// Move the selected story from the active list to the dismissed
    /// archive. Only meaningful from the active view.
    DismissStory,
    /// Merge a freshly fetched batch into the active list.
    IngestStories(Vec<Story>),
    ToggleView,
    /// Clear the popup-blocked banner.
    DismissAlert,
}

/// The whole client state.
///
/// Only the two story lists survive a restart; selection, view and the
/// alert flag always start fresh.
#[derive(Debug, Clone, PartialEq)]
pub struct TriageState {
    /// Index into the list selected by `current_view`. Held in
    /// `0..max(1, len)` by every transition except an out-of-range
    /// [`Action::NavSelect`], which is honored verbatim.
    pub selected_index: usize,
    /// Stories not yet dismissed, newest first.
    pub active_stories: Vec<Story>,
    /// Triaged-away stories, most recently dismissed first, capped at
    /// [`KEEP_MAX_DISMISSED_STORIES`].
    pub dismissed_stories: Vec<Story>,
    pub current_view: View,
    /// Set when the opener reports a failed open. Cleared only by
    /// [`Action::DismissAlert`].
    pub popup_blocked_alert: bool,
}

impl Default for TriageState {
    fn default() -> Self {
        Self::new()
    }
}

impl TriageState {
    pub fn new() -> Self {
        Self::with_lists(Vec::new(), Vec::new())
    }

    /// State as restored from a persisted snapshot.
    pub fn with_lists(active: Vec<Story>, dismissed: Vec<Story>) -> Self {
        Self {
            selected_index: 0,
            active_stories: active,
            dismissed_stories: dismissed,
            current_view: View::Active,
            popup_blocked_alert: false,
        }
    }

    /// The list the current view addresses.
    pub fn current_list(&self) -> &[Story] {
        match self.current_view {
            View::Active => &self.active_stories,
            View::Dismissed => &self.dismissed_stories,
        }
    }

    /// The story under the cursor, if the selection is in range.
    pub fn selected_story(&self) -> Option<&Story> {
        self.current_list().get(self.selected_index)
    }

    fn is_known(&self, id: &str) -> bool {
        self.active_stories
            .iter()
            .chain(&self.dismissed_stories)
            .any(|s| s.id == id)
    }
}

/// Apply one action, producing the next state.
pub fn apply(state: &TriageState, action: Action, opener: &dyn Opener) -> TriageState {
    match action {
        Action::NavUp => {
            let len = state.current_list().len();
            let mut next = state.clone();
            next.selected_index = if next.selected_index > 0 {
                next.selected_index - 1
            } else if len > 0 {
                len - 1
            } else {
                0
            };
            next
        }

        Action::NavDown => {
            let len = state.current_list().len();
            let mut next = state.clone();
            next.selected_index = if len > 0 && next.selected_index < len - 1 {
                next.selected_index + 1
            } else {
                0
            };
            next
        }

        Action::NavSelect(index) => {
            let mut next = state.clone();
            next.selected_index = index;
            next
        }

        Action::FollowPrimary => {
            let Some(story) = state.selected_story() else {
                return state.clone();
            };
            let mut next = state.clone();
            if !opener.open(&story.url) {
                next.popup_blocked_alert = true;
            }
            next
        }

        Action::FollowSecondary => {
            let Some(url) = state.selected_story().and_then(|s| s.external_url.as_deref())
            else {
                return state.clone();
            };
            let mut next = state.clone();
            if !opener.open(url) {
                next.popup_blocked_alert = true;
            }
            next
        }

        Action::DismissStory => {
            // Dismissal is one-directional: nothing happens from the
            // dismissed view, and an out-of-range selection has no story
            // to move.
            if state.current_view != View::Active
                || state.selected_index >= state.active_stories.len()
            {
                return state.clone();
            }
            let mut next = state.clone();
            let story = next.active_stories.remove(next.selected_index);
            next.dismissed_stories.insert(0, story);
            next.dismissed_stories.truncate(KEEP_MAX_DISMISSED_STORIES);
            if next.selected_index >= next.active_stories.len() {
                next.selected_index = next.active_stories.len().saturating_sub(1);
            }
            next
        }

        Action::IngestStories(fetched) => {
            let mut next = state.clone();
            let mut incoming: Vec<Story> = Vec::new();
            for story in fetched {
                let duplicate =
                    next.is_known(&story.id) || incoming.iter().any(|s| s.id == story.id);
                if !duplicate {
                    incoming.push(story);
                }
            }
            // Freshest stories lead; the previous list follows unchanged.
            incoming.append(&mut next.active_stories);
            next.active_stories = incoming;
            next.selected_index = 0;
            next
        }

        Action::ToggleView => {
            let mut next = state.clone();
            next.current_view = match next.current_view {
                View::Active => View::Dismissed,
                View::Dismissed => View::Active,
            };
            next.selected_index = 0;
            next
        }

        Action::DismissAlert => {
            let mut next = state.clone();
            next.popup_blocked_alert = false;
            next
        }
    }
}
