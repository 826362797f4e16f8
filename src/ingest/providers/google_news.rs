// src/ingest/providers/google_news.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use metrics::{counter, histogram};
use quick_xml::de::from_str;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use time::format_description::well_known::{Rfc2822, Rfc3339};
use time::OffsetDateTime;

use crate::config::FeedSettings;
use crate::ingest::types::{FeedEntry, FeedSource};

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    item: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    // quick-xml hands over `<dc:date>` by its local name
    #[serde(rename = "date", alias = "dc:date")]
    dc_date: Option<String>,
    description: Option<String>,
}

/// RFC 2822 (RSS `pubDate`), falling back to RFC 3339 (`dc:date`, Atom-style).
pub fn parse_published(ts: &str) -> Option<DateTime<Utc>> {
    let ts = ts.trim();
    let odt = OffsetDateTime::parse(ts, &Rfc2822)
        .or_else(|_| OffsetDateTime::parse(ts, &Rfc3339))
        .ok()?;
    DateTime::<Utc>::from_timestamp(odt.unix_timestamp(), odt.nanosecond())
}

/// Parse an RSS 2.0 document into entries. Fields are kept raw; cleaning
/// happens downstream.
pub fn parse_feed(xml: &str) -> Result<Vec<FeedEntry>> {
    let t0 = std::time::Instant::now();
    let xml_clean = scrub_html_entities_for_xml(xml);
    let rss: Rss = from_str(&xml_clean).context("parsing google news rss xml")?;

    let out: Vec<FeedEntry> = rss
        .channel
        .item
        .into_iter()
        .map(|it| FeedEntry {
            published_at: it
                .pub_date
                .as_deref()
                .or(it.dc_date.as_deref())
                .and_then(parse_published),
            title: it.title.unwrap_or_default(),
            summary: it.description.unwrap_or_default(),
            link: it.link.unwrap_or_default(),
        })
        .collect();

    let ms = t0.elapsed().as_secs_f64() * 1_000.0;
    histogram!("digest_parse_ms").record(ms);
    counter!("digest_entries_fetched_total").increment(out.len() as u64);
    Ok(out)
}

pub struct GoogleNewsProvider {
    mode: Mode,
}

enum Mode {
    Fixture(String),
    Http {
        client: Client,
        settings: FeedSettings,
        window_days: i64,
    },
}

impl GoogleNewsProvider {
    /// Serve the same document for every subject. Used by tests and offline previews.
    pub fn from_fixture(xml: &str) -> Self {
        Self {
            mode: Mode::Fixture(xml.to_string()),
        }
    }

    pub fn new(settings: &FeedSettings, window_days: i64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(concat!("weekly-news-digest/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("building http client")?;
        Ok(Self {
            mode: Mode::Http {
                client,
                settings: settings.clone(),
                window_days,
            },
        })
    }

    /// `q` carries the subject plus a `when:Nd` hint; results are still
    /// re-checked for recency locally.
    pub fn search_url(settings: &FeedSettings, subject: &str, window_days: i64) -> Result<Url> {
        let q = format!("{subject} when:{window_days}d");
        Url::parse_with_params(
            &settings.base_url,
            &[
                ("q", q.as_str()),
                ("hl", settings.hl.as_str()),
                ("gl", settings.gl.as_str()),
                ("ceid", settings.ceid.as_str()),
            ],
        )
        .with_context(|| format!("building search url for {subject}"))
    }
}

#[async_trait]
impl FeedSource for GoogleNewsProvider {
    async fn fetch(&self, subject: &str) -> Result<Vec<FeedEntry>> {
        match &self.mode {
            Mode::Fixture(s) => parse_feed(s),
            Mode::Http {
                client,
                settings,
                window_days,
            } => {
                let url = Self::search_url(settings, subject, *window_days)?;
                tracing::debug!(%url, subject, "fetching feed");
                let body = client
                    .get(url)
                    .send()
                    .await
                    .context("google news http get()")?
                    .error_for_status()
                    .context("google news non-2xx")?
                    .text()
                    .await
                    .context("google news http .text()")?;
                parse_feed(&body)
            }
        }
    }

    fn name(&self) -> &'static str {
        "GoogleNews"
    }
}

/// HTML-only entities seen in scraped headlines. XML rejects them, so they
/// are replaced before parsing. Descriptions arrive double-escaped
/// (`&amp;nbsp;`) and are not touched by this.
const HTML_ONLY_ENTITIES: [(&str, &str); 9] = [
    ("&nbsp;", " "),
    ("&hellip;", "..."),
    ("&ndash;", "-"),
    ("&mdash;", "-"),
    ("&middot;", "-"),
    ("&ldquo;", "\""),
    ("&rdquo;", "\""),
    ("&lsquo;", "'"),
    ("&rsquo;", "'"),
];

fn scrub_html_entities_for_xml(s: &str) -> String {
    HTML_ONLY_ENTITIES
        .iter()
        .fold(s.to_string(), |acc, &(from, to)| acc.replace(from, to))
}
