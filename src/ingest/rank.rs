// src/ingest/rank.rs
//! Ordering heuristic: a longer raw summary is taken as a sign of a more
//! substantial story. This is a cheap proxy, not a salience measure.

use crate::ingest::types::FeedEntry;

/// Stable sort by raw summary length (chars), descending, then keep `limit`.
pub fn rank_by_summary_len(mut entries: Vec<FeedEntry>, limit: usize) -> Vec<FeedEntry> {
    // sort_by_key is stable, so ties keep feed order
    entries.sort_by_key(|e| std::cmp::Reverse(e.summary.chars().count()));
    entries.truncate(limit);
    entries
}
