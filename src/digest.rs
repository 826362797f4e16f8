// src/digest.rs
//! One weekly run: fetch every subject in order, select its entries, compose
//! the report, deliver it. Strictly sequential; nothing is sent unless the
//! whole report was built.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use metrics::counter;
use tracing::{info, warn};

use crate::config::DigestConfig;
use crate::ingest::types::{FeedSource, SubjectEntry};
use crate::ingest::{ensure_metrics_described, select_entries};
use crate::notify::Delivery;
use crate::report::Report;

/// Fetch and select entries for every configured subject.
///
/// A subject whose fetch fails either aborts the run or, with
/// `isolate_fetch_failures`, contributes nothing (its detail section then
/// reads "No major news found.").
pub async fn collect_entries<F>(
    cfg: &DigestConfig,
    source: &F,
    now: DateTime<Utc>,
) -> Result<Vec<SubjectEntry>>
where
    F: FeedSource + Sync + ?Sized,
{
    ensure_metrics_described();

    let mut kept_all = Vec::new();
    for subject in &cfg.subjects {
        let raw = match source.fetch(subject).await {
            Ok(v) => v,
            Err(e) if cfg.isolate_fetch_failures => {
                warn!(error = ?e, subject = %subject, provider = source.name(), "feed fetch failed; reporting no news");
                counter!("digest_fetch_errors_total").increment(1);
                continue;
            }
            Err(e) => {
                counter!("digest_fetch_errors_total").increment(1);
                return Err(e).with_context(|| format!("fetching news for {subject}"));
            }
        };

        let fetched = raw.len();
        let kept = select_entries(cfg, raw, now);
        info!(subject = %subject, fetched, kept = kept.len(), "subject processed");

        // select_entries only passes recent, hence dated, entries
        kept_all.extend(
            kept.into_iter()
                .filter_map(|entry| SubjectEntry::new(subject.as_str(), entry)),
        );
    }
    Ok(kept_all)
}

pub async fn build_report<F>(cfg: &DigestConfig, source: &F, now: DateTime<Utc>) -> Result<Report>
where
    F: FeedSource + Sync + ?Sized,
{
    let kept = collect_entries(cfg, source, now).await?;
    Ok(Report::compose(&cfg.subjects, &kept))
}

/// Full cycle. Returns the report that was delivered.
pub async fn run_digest<F, D>(
    cfg: &DigestConfig,
    source: &F,
    delivery: &D,
    now: DateTime<Utc>,
) -> Result<Report>
where
    F: FeedSource + Sync + ?Sized,
    D: Delivery + Sync + ?Sized,
{
    let report = build_report(cfg, source, now).await?;
    info!(
        paragraphs = report.summary_paragraphs.len(),
        sections = report.detail_sections.len(),
        sink = delivery.name(),
        "report composed"
    );

    delivery
        .deliver(&report.render())
        .await
        .with_context(|| format!("delivering report via {}", delivery.name()))?;
    Ok(report)
}
