//! The external-open capability.
//!
//! Following a story hands its URL to an [`Opener`]; the state machine only
//! ever sees the returned boolean. Tests inject fakes, production uses
//! [`SystemOpener`].

/// Opens URLs in the user's browser.
pub trait Opener {
    /// Attempt to open `url`.
    ///
    /// Returns `false` when the platform refused — no registered handler,
    /// spawn failure, or an environment that blocks new windows.
    fn open(&self, url: &str) -> bool;
}

/// Opener backed by the platform's default URL handler.
pub struct SystemOpener;

impl Opener for SystemOpener {
    fn open(&self, url: &str) -> bool {
        open::that(url).is_ok()
    }
}
