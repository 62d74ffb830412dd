//! Background feed polling.
//!
//! Runs on a dedicated thread, periodically fetching all configured data
//! sources and sending results to the UI thread over an [`mpsc`] channel.
//! Between rounds the thread waits on a wake channel, so the refresh key
//! can force an immediate fetch instead of waiting out the timer.
//!
//! ## For contributors
//!
//! The poller is intentionally simple: it fetches every source
//! sequentially, sends results, then sleeps until woken or timed out.  If
//! you need concurrent fetching of multiple sources, consider spawning one
//! thread per source.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::source::{DataSource, Story};

/// Messages sent from the poller thread to the UI thread.
pub enum PollMsg {
    /// A successful fetch returned these stories.
    Stories(Vec<Story>),
    /// A fetch failed with this error description.
    Error(String),
}

/// How long the poller waits before re-fetching on its own.
const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Spawn the background polling thread.
///
/// Returns the wake sender (send `()` to force an immediate fetch) and a
/// receiver the main loop should drain on every tick.  The thread runs
/// until the receiver is dropped (the next send fails) or the wake sender
/// is dropped while the thread is waiting.
pub fn spawn(sources: Vec<Box<dyn DataSource>>) -> (mpsc::Sender<()>, mpsc::Receiver<PollMsg>) {
    let (wake_tx, wake_rx) = mpsc::channel::<()>();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || loop {
        for src in &sources {
            let msg = match src.fetch() {
                Ok(stories) => PollMsg::Stories(stories),
                Err(e) => PollMsg::Error(format!("{}: {e}", src.name())),
            };
            // If the receiver is gone the main thread has exited;
            // silently stop polling.
            if tx.send(msg).is_err() {
                return;
            }
        }
        match wake_rx.recv_timeout(POLL_INTERVAL) {
            // Woken for an on-demand refresh, or the timer ran out —
            // either way, fetch again.
            Ok(()) | Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => return,
        }
    });

    (wake_tx, rx)
}
