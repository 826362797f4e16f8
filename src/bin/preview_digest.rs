//! Runs the digest pipeline and prints the report instead of mailing it.
//! Pass a path to an RSS file to render it offline for every subject.

use anyhow::{Context, Result};
use chrono::Utc;

use weekly_news_digest::config::DigestConfig;
use weekly_news_digest::ingest::providers::google_news::GoogleNewsProvider;
use weekly_news_digest::notify::StdoutDelivery;
use weekly_news_digest::{init_tracing, run_digest};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = DigestConfig::default();
    let source = match std::env::args().nth(1) {
        Some(path) => {
            let xml = std::fs::read_to_string(&path)
                .with_context(|| format!("reading fixture {path}"))?;
            GoogleNewsProvider::from_fixture(&xml)
        }
        None => GoogleNewsProvider::new(&cfg.feed, cfg.window_days)?,
    };

    run_digest(&cfg, &source, &StdoutDelivery, Utc::now()).await?;
    Ok(())
}
