// src/ingest/filter.rs
use chrono::{DateTime, Duration, Utc};

use crate::ingest::normalize::clean_text;
use crate::ingest::types::FeedEntry;

/// True iff the entry carries a timestamp no older than `window_days` before `now`.
/// The boundary itself counts as recent.
pub fn is_recent(entry: &FeedEntry, now: DateTime<Utc>, window_days: i64) -> bool {
    match entry.published_at {
        Some(ts) => ts >= now - Duration::days(window_days),
        None => false,
    }
}

/// Case-insensitive substring match against any keyword.
pub fn matches_keywords<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    let text_low = text.to_lowercase();
    keywords
        .iter()
        .any(|k| text_low.contains(&k.as_ref().to_lowercase()))
}

/// Text the keyword gate looks at: summary first, then title, cleaned.
pub fn match_text(entry: &FeedEntry) -> String {
    clean_text(&format!("{} {}", entry.summary, entry.title))
}

/// Recency first, then keywords. Input order is preserved.
pub fn filter_entries<S: AsRef<str>>(
    entries: Vec<FeedEntry>,
    now: DateTime<Utc>,
    window_days: i64,
    keywords: &[S],
) -> Vec<FeedEntry> {
    entries
        .into_iter()
        .filter(|e| is_recent(e, now, window_days))
        .filter(|e| matches_keywords(&match_text(e), keywords))
        .collect()
}
