//! Weekly news digest: binary entrypoint.
//! One fetch → filter → compose → mail cycle, then exit.

use anyhow::{Context, Result};
use chrono::Utc;

use weekly_news_digest::config::{DigestConfig, MailCredentials};
use weekly_news_digest::ingest::providers::google_news::GoogleNewsProvider;
use weekly_news_digest::notify::email::EmailSender;
use weekly_news_digest::{init_tracing, run_digest};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = DigestConfig::default();

    // Credentials first: a missing value must stop us before any network call.
    let creds = MailCredentials::from_env().context("loading mail configuration")?;

    let source = GoogleNewsProvider::new(&cfg.feed, cfg.window_days)?;
    let sender = EmailSender::new(&cfg.mail, &creds)?;

    run_digest(&cfg, &source, &sender, Utc::now()).await?;
    tracing::info!("weekly digest sent");
    Ok(())
}
