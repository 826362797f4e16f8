// src/ingest/types.rs
use anyhow::Result;
use chrono::{DateTime, Utc};

/// One raw item as it came out of a feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    /// Raw description; may contain markup and may be empty.
    pub summary: String,
    /// `None` when the feed gave no timestamp or one we could not parse.
    pub published_at: Option<DateTime<Utc>>,
    pub link: String,
}

/// A recent, keyword-matching entry together with the subject it was fetched for.
/// Only dated entries can be recent, so the timestamp is lifted out of the `Option`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectEntry {
    pub subject: String,
    pub published_at: DateTime<Utc>,
    pub entry: FeedEntry,
}

impl SubjectEntry {
    /// `None` for an undated entry.
    pub fn new(subject: impl Into<String>, entry: FeedEntry) -> Option<Self> {
        let published_at = entry.published_at?;
        Some(Self {
            subject: subject.into(),
            published_at,
            entry,
        })
    }
}

#[async_trait::async_trait]
pub trait FeedSource {
    /// Entries currently published for `subject`. An empty feed is `Ok(vec![])`.
    async fn fetch(&self, subject: &str) -> Result<Vec<FeedEntry>>;
    fn name(&self) -> &'static str;
}
