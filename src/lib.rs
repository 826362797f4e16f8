// src/lib.rs
// Public library surface for the binaries and integration tests.

pub mod config;
pub mod digest;
pub mod ingest;
pub mod notify;
pub mod report;

pub use crate::config::{DigestConfig, MailCredentials};
pub use crate::digest::{build_report, collect_entries, run_digest};
pub use crate::ingest::types::{FeedEntry, FeedSource, SubjectEntry};
pub use crate::notify::Delivery;
pub use crate::report::Report;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compact stderr logging. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("weekly_news_digest=info,warn"));

    // A second init (tests, embedding) is not an error worth failing on.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}
