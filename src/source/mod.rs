//! Data source abstraction layer.
//!
//! This module defines the [`DataSource`] trait and the common [`Story`]
//! type. Concrete source implementations live in sub-modules (currently
//! only [`json_feed`]).
//!
//! ## For contributors — adding a new source
//!
//! 1. Create a new file in this directory (e.g. `atom.rs`).
//! 2. Define a struct (e.g. `AtomSource`) and implement [`DataSource`] for it.
//! 3. Add `mod atom;` below and re-export your struct in the `pub use` block.
//! 4. Construct an instance in `main.rs` and add it to the `sources` vec.
//!
//! The polling loop, de-duplication, and UI are all source-agnostic.

mod json_feed;
mod story;

pub use json_feed::JsonFeedSource;
pub use story::Story;

use anyhow::Result;

/// Trait that every story source must implement.
///
/// The polling loop calls [`fetch()`](DataSource::fetch) periodically on a
/// background thread, so implementations must be [`Send`].
pub trait DataSource: Send {
    /// Human-readable label used in status-bar error messages.
    fn name(&self) -> &str;

    /// Fetch the latest batch of stories.
    ///
    /// Implementations perform their own HTTP/IO work and return normalised
    /// [`Story`] values. Errors are surfaced to the UI as status messages;
    /// a failed fetch never reaches the state machine.
    fn fetch(&self) -> Result<Vec<Story>>;
}
