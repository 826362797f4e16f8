// tests/digest_pipeline.rs
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

use weekly_news_digest::{
    build_report, run_digest, Delivery, DigestConfig, FeedEntry, FeedSource,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 13, 9, 0, 0).unwrap()
}

fn entry(title: &str, summary: &str, age_hours: i64) -> FeedEntry {
    FeedEntry {
        title: title.into(),
        summary: summary.into(),
        published_at: Some(now() - Duration::hours(age_hours)),
        link: format!("https://example.test/{}", title.replace(' ', "-")),
    }
}

/// Canned entries per subject; subjects listed in `failing` return an error.
#[derive(Default)]
struct MockSource {
    feeds: HashMap<String, Vec<FeedEntry>>,
    failing: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl MockSource {
    fn with(mut self, subject: &str, entries: Vec<FeedEntry>) -> Self {
        self.feeds.insert(subject.to_string(), entries);
        self
    }

    fn failing(mut self, subject: &str) -> Self {
        self.failing.push(subject.to_string());
        self
    }
}

#[async_trait]
impl FeedSource for MockSource {
    async fn fetch(&self, subject: &str) -> Result<Vec<FeedEntry>> {
        self.calls.lock().unwrap().push(subject.to_string());
        if self.failing.iter().any(|s| s == subject) {
            return Err(anyhow!("connection refused"));
        }
        Ok(self.feeds.get(subject).cloned().unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "MockSource"
    }
}

#[derive(Default)]
struct MockDelivery {
    sent: Mutex<Vec<String>>,
    fail: bool,
}

#[async_trait]
impl Delivery for MockDelivery {
    async fn deliver(&self, body: &str) -> Result<()> {
        if self.fail {
            return Err(anyhow!("535 authentication failed"));
        }
        self.sent.lock().unwrap().push(body.to_string());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[tokio::test]
async fn one_matching_subject_yields_one_paragraph_three_sections() {
    let cfg = DigestConfig::default();
    let source = MockSource::default().with(
        "BYD",
        vec![
            entry("BYD opens plant", "<p>New   plant in Szeged.</p>", 5),
            entry("BYD CEO on holiday", "Nothing to see.", 6),
        ],
    );
    let delivery = MockDelivery::default();

    let report = run_digest(&cfg, &source, &delivery, now()).await.unwrap();

    assert_eq!(
        report.summary_paragraphs,
        vec!["For BYD, the main development this week was: BYD opens plant.".to_string()]
    );
    assert_eq!(report.detail_sections.len(), 3);

    let sent = delivery.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    let body = &sent[0];
    let x = body.find("=== XIAOMI ===").unwrap();
    let b = body.find("=== BYD ===").unwrap();
    let a = body.find("=== APPLE ===").unwrap();
    assert!(x < b && b < a);
    assert!(body.contains("Published: 2025-10-13 04:00\n"));
    assert!(body.contains("Source: https://example.test/BYD-opens-plant\n"));
    assert!(body.contains("New plant in Szeged.\n"));
    assert!(!body.contains("holiday"));
    assert_eq!(body.matches("No major news found.").count(), 2);

    // subjects fetched one by one, in configured order
    assert_eq!(*source.calls.lock().unwrap(), vec!["Xiaomi", "BYD", "Apple"]);
}

#[tokio::test]
async fn zero_matches_render_no_updates_sentence() {
    let cfg = DigestConfig::default();
    let source = MockSource::default().with("Apple", vec![entry("Dividend", "Quarterly dividend", 1)]);

    let report = build_report(&cfg, &source, now()).await.unwrap();
    let body = report.render();

    assert!(report.summary_paragraphs.is_empty());
    assert!(body.starts_with(
        "No major updates were detected for Xiaomi, BYD, or Apple this week.\n\n\n"
    ));
    assert_eq!(body.matches("No major news found.").count(), 3);
}

#[tokio::test]
async fn several_hits_are_ranked_and_truncated() {
    let mut cfg = DigestConfig::with_subjects(["Xiaomi"]);
    cfg.max_per_subject = 2;
    let source = MockSource::default().with(
        "Xiaomi",
        vec![
            entry("Sales rise", "short", 1),
            entry("Launch event", "a somewhat longer summary", 2),
            entry("Factory tour", "the longest summary of the three by far", 3),
        ],
    );

    let report = build_report(&cfg, &source, now()).await.unwrap();
    assert_eq!(
        report.summary_paragraphs,
        vec!["For Xiaomi, key developments included: Factory tour; and Launch event.".to_string()]
    );
    let section = &report.detail_sections[0];
    assert!(section.find("--- Factory tour ---").unwrap() < section.find("--- Launch event ---").unwrap());
    assert!(!section.contains("Sales rise"));
}

#[tokio::test]
async fn isolated_fetch_failure_still_gets_a_section() {
    let cfg = DigestConfig::default();
    let source = MockSource::default()
        .failing("Xiaomi")
        .with("Apple", vec![entry("Apple expansion", "", 1)]);
    let delivery = MockDelivery::default();

    let report = run_digest(&cfg, &source, &delivery, now()).await.unwrap();

    assert_eq!(report.detail_sections.len(), 3);
    assert_eq!(report.detail_sections[0], "\n\n=== XIAOMI ===\nNo major news found.");
    assert_eq!(report.summary_paragraphs.len(), 1);
    assert_eq!(delivery.sent.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn fetch_failure_aborts_when_not_isolated() {
    let mut cfg = DigestConfig::default();
    cfg.isolate_fetch_failures = false;
    let source = MockSource::default().failing("BYD");
    let delivery = MockDelivery::default();

    let err = run_digest(&cfg, &source, &delivery, now()).await.unwrap_err();

    assert!(format!("{err:#}").contains("fetching news for BYD"));
    assert!(delivery.sent.lock().unwrap().is_empty());
    // Apple is never reached
    assert_eq!(*source.calls.lock().unwrap(), vec!["Xiaomi", "BYD"]);
}

#[tokio::test]
async fn delivery_failure_is_surfaced() {
    let cfg = DigestConfig::default();
    let source = MockSource::default();
    let delivery = MockDelivery {
        fail: true,
        ..Default::default()
    };

    let err = run_digest(&cfg, &source, &delivery, now()).await.unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("delivering report via mock"));
    assert!(msg.contains("535"));
}

#[tokio::test]
async fn undated_entries_never_reach_the_report() {
    let cfg = DigestConfig::with_subjects(["BYD"]);
    let mut undated = entry("BYD capacity", "capacity", 0);
    undated.published_at = None;
    let source = MockSource::default().with("BYD", vec![undated]);

    let report = build_report(&cfg, &source, now()).await.unwrap();
    assert!(report.summary_paragraphs.is_empty());
    assert_eq!(report.detail_sections, vec!["\n\n=== BYD ===\nNo major news found.".to_string()]);
}
