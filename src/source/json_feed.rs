//! JSON Feed source implementation.
//!
//! Fetches a [JSON Feed](https://jsonfeed.org) document over HTTP and maps
//! its items to [`Story`] values. hnrss.org serves the Hacker News front
//! page in this format, which is the default feed in `main.rs`.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{DataSource, Story};

/// Raw JSON Feed document. Only the fields this client reads.
#[derive(Debug, Deserialize)]
struct Feed {
    #[serde(default)]
    items: Vec<Item>,
}

/// Raw JSON Feed item, before normalisation.
#[derive(Debug, Deserialize)]
struct Item {
    id: Option<String>,
    title: Option<String>,
    url: Option<String>,
    external_url: Option<String>,
    date_published: Option<String>,
}

/// A JSON Feed data source.
pub struct JsonFeedSource {
    /// The feed URL to poll.
    pub url: String,
    /// A short label used in error messages.
    pub label: String,
}

impl JsonFeedSource {
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
        }
    }

    /// Parse a fetched JSON Feed document into [`Story`] values.
    ///
    /// This is a pure function (no I/O) so that tests can exercise the
    /// mapping without hitting the network. Degrades gracefully item by
    /// item: a missing `id` falls back to the `url`, a missing title gets a
    /// placeholder, an unparseable date is dropped. Items without a `url`
    /// are skipped — there is nothing to follow.
    pub fn parse_feed(body: &[u8]) -> Result<Vec<Story>> {
        let feed: Feed = serde_json::from_slice(body)?;

        let stories = feed
            .items
            .into_iter()
            .filter_map(|item| {
                let url = item.url?;
                let id = item.id.unwrap_or_else(|| url.clone());

                // Parse RFC 3339; gracefully degrade to None on failure.
                let published = item
                    .date_published
                    .as_deref()
                    .and_then(|d| DateTime::parse_from_rfc3339(d).ok())
                    .map(|dt| dt.with_timezone(&Utc));

                Some(Story {
                    id,
                    title: item.title.unwrap_or_else(|| "(untitled)".to_string()),
                    url,
                    external_url: item.external_url,
                    published,
                })
            })
            .collect();

        Ok(stories)
    }
}

impl DataSource for JsonFeedSource {
    fn name(&self) -> &str {
        &self.label
    }

    fn fetch(&self) -> Result<Vec<Story>> {
        let body = reqwest::blocking::get(&self.url)?.bytes()?;
        Self::parse_feed(body.as_ref())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
