//! story-triage — keyboard-driven triage of a news feed, in the terminal.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────┐  PollMsg   ┌──────────┐  draw()  ┌──────────┐
//! │  poll.rs │ ─────────► │  app.rs  │ ───────► │  ui.rs   │
//! │ (thread) │  (channel) │ (driver) │          │ (render) │
//! └──────────┘            └──────────┘          └──────────┘
//!      ▲                    │      ▲
//!      │ wake (refresh)     ▼      │ Action
//!      │               ┌──────────┐│          ┌──────────┐
//!      └────────────── │ state.rs │└───────── │ input.rs │
//!                      └──────────┘           └──────────┘
//! ```
//!
//! * **`state`** — the triage state machine: two story lists, a selection
//!   index, a view toggle, and the pure `apply` transition function.
//! * **`source/`** — the `DataSource` trait and concrete implementations
//!   (currently JSON Feed only).
//! * **`poll`** — spawns a background thread that fetches sources on a
//!   timer, or immediately when woken by the refresh key.
//! * **`app`** — drives the state machine, persists the snapshot after
//!   every change to either list.
//! * **`storage`** / **`export`** — the JSON snapshot on disk and its
//!   export as a shareable file.
//! * **`ui`** — pure rendering: reads `App` state and draws widgets.
//! * **`input`** — maps key and mouse events to actions.
//! * **`main`** — wires everything together: parse args, set up the
//!   terminal, and run the event loop.

mod app;
mod export;
mod input;
mod opener;
mod poll;
mod source;
mod state;
mod storage;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use opener::SystemOpener;
use poll::PollMsg;
use source::{DataSource, JsonFeedSource};
use state::Action;
use storage::Storage;

/// Where stories come from when no feed URL is given on the command line.
const DEFAULT_FEED_URL: &str = "https://hnrss.org/frontpage.jsonfeed?count=100";

// ---------------------------------------------------------------------------
// RAII terminal guard — idiomatic cleanup even on panic
// ---------------------------------------------------------------------------

/// Manages terminal raw-mode and alternate-screen lifetime via [`Drop`].
///
/// Constructing this struct enters raw mode + alternate screen and enables
/// mouse capture.  When the value is dropped (normally or during stack
/// unwinding) it restores the terminal.  This prevents the common TUI bug
/// where a panic leaves the terminal in a broken state.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Install a panic hook that restores the terminal before printing the
/// panic message.  Without this, a panic inside the event loop would leave
/// raw mode enabled and the alternate screen active.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(info);
    }));
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    install_panic_hook();

    // -- parse arguments -----------------------------------------------------
    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_FEED_URL.into());

    // -- configure data sources ----------------------------------------------
    // To add more feeds, push additional sources here.
    let sources: Vec<Box<dyn DataSource>> = vec![Box::new(JsonFeedSource::new(url, "feed"))];

    // -- start background polling --------------------------------------------
    let (wake, rx) = poll::spawn(sources);

    // -- terminal setup (RAII — Drop restores on exit or panic) --------------
    let mut guard = TerminalGuard::new()?;
    let mut app = App::new(Storage::new(Storage::default_path()), Box::new(SystemOpener));

    // -- main event loop -----------------------------------------------------
    // Runs at ~10 fps (100 ms tick).  Each iteration:
    //   1. Drain any messages from the poller.
    //   2. Render the UI.
    //   3. Poll for input (non-blocking, up to tick_rate).
    let tick_rate = Duration::from_millis(100);

    loop {
        // 1. Process poll messages
        while let Ok(msg) = rx.try_recv() {
            match msg {
                PollMsg::Stories(stories) => {
                    let count = stories.len();
                    app.dispatch(Action::IngestStories(stories));
                    app.status = format!("Fetched {count} stories");
                }
                PollMsg::Error(e) => {
                    app.status = format!("Error: {e}");
                }
            }
        }

        // 2. Render
        guard.terminal.draw(|f| ui::draw(&mut app, f))?;

        // 3. Handle input
        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) => input::handle_key_event(&mut app, key, &wake),
                Event::Mouse(mouse) => input::handle_mouse_event(&mut app, mouse),
                _ => {}
            }
        }

        if app.quit {
            break;
        }
    }

    // `guard` is dropped here, restoring the terminal.
    Ok(())
}
