// src/config/mod.rs
//! Fixed run configuration. Everything here is a compile-time constant except
//! the mail credentials, which come from the environment (see [`mail`]).

pub mod mail;

pub use mail::MailCredentials;

pub const DEFAULT_SUBJECTS: [&str; 3] = ["Xiaomi", "BYD", "Apple"];

pub const DEFAULT_KEYWORDS: [&str; 13] = [
    "revenue",
    "sales",
    "earnings",
    "volume",
    "expansion",
    "capacity",
    "plant",
    "closure",
    "factory",
    "new project",
    "project",
    "new product",
    "launch",
];

pub const DEFAULT_WINDOW_DAYS: i64 = 7;
pub const DEFAULT_MAX_PER_SUBJECT: usize = 5;

/// Google News search endpoint and locale parameters.
#[derive(Debug, Clone)]
pub struct FeedSettings {
    pub base_url: String,
    pub hl: String,
    pub gl: String,
    pub ceid: String,
    pub timeout_secs: u64,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            base_url: "https://news.google.com/rss/search".to_string(),
            hl: "en-US".to_string(),
            gl: "US".to_string(),
            ceid: "US:en".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Submission relay and message header constants.
#[derive(Debug, Clone)]
pub struct MailSettings {
    pub smtp_host: String,
    /// Submission port; the session is upgraded with STARTTLS.
    pub smtp_port: u16,
    pub subject_line: String,
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            smtp_host: "smtp.office365.com".to_string(),
            smtp_port: 587,
            subject_line: "Weekly News Summary".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DigestConfig {
    /// Tracked subjects, in report order.
    pub subjects: Vec<String>,
    pub keywords: Vec<String>,
    pub window_days: i64,
    pub max_per_subject: usize,
    /// When true, a subject whose feed cannot be fetched is reported as having
    /// no news instead of aborting the whole run.
    pub isolate_fetch_failures: bool,
    pub feed: FeedSettings,
    pub mail: MailSettings,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            subjects: DEFAULT_SUBJECTS.iter().map(|s| s.to_string()).collect(),
            keywords: DEFAULT_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            window_days: DEFAULT_WINDOW_DAYS,
            max_per_subject: DEFAULT_MAX_PER_SUBJECT,
            isolate_fetch_failures: true,
            feed: FeedSettings::default(),
            mail: MailSettings::default(),
        }
    }
}

impl DigestConfig {
    /// Same constants, different subject list. Handy for tests and previews.
    pub fn with_subjects<I, S>(subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            subjects: subjects.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}
