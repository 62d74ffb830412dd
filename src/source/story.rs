//! The story type shared across the whole client.
//!
//! Every source implementation converts its native records into `Story`
//! values so the state machine, persistence and rendering stay
//! source-agnostic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single story, normalised from the backend feed.
///
/// Identity is the `id` field alone: two values with the same identifier
/// are the same story, and the first one ingested wins — a later fetch
/// never updates a known story's title or links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Stable, unique identifier used for de-duplication across fetches.
    pub id: String,

    /// Headline.
    pub title: String,

    /// Primary link to the story content.
    pub url: String,

    /// Secondary link (the comments page), when the feed provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,

    /// Publication timestamp, shown in the list.
    ///
    /// Display only — list order is insertion order, never date order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<DateTime<Utc>>,
}
