// src/ingest/mod.rs
pub mod filter;
pub mod normalize;
pub mod providers;
pub mod rank;
pub mod types;

use chrono::{DateTime, Utc};
use metrics::{counter, describe_counter, describe_histogram};
use once_cell::sync::OnceCell;

use crate::config::DigestConfig;
use crate::ingest::types::FeedEntry;

pub use filter::{filter_entries, is_recent, match_text, matches_keywords};
pub use normalize::clean_text;
pub use rank::rank_by_summary_len;

/// One-time metrics registration.
pub(crate) fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "digest_entries_fetched_total",
            "Entries parsed from feed documents."
        );
        describe_counter!(
            "digest_entries_recent_total",
            "Entries inside the recency window."
        );
        describe_counter!(
            "digest_entries_kept_total",
            "Entries kept after keyword filter and truncation."
        );
        describe_counter!("digest_fetch_errors_total", "Feed fetch/parse errors.");
        describe_histogram!("digest_parse_ms", "Feed parse time in milliseconds.");
    });
}

/// Recency → keywords → rank/truncate for one subject's raw entries.
pub fn select_entries(
    cfg: &DigestConfig,
    raw: Vec<FeedEntry>,
    now: DateTime<Utc>,
) -> Vec<FeedEntry> {
    ensure_metrics_described();

    let recent = raw
        .iter()
        .filter(|e| is_recent(e, now, cfg.window_days))
        .count();
    counter!("digest_entries_recent_total").increment(recent as u64);

    let matched = filter_entries(raw, now, cfg.window_days, &cfg.keywords);
    let kept = rank_by_summary_len(matched, cfg.max_per_subject);

    counter!("digest_entries_kept_total").increment(kept.len() as u64);
    kept
}
