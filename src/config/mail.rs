// src/config/mail.rs
use anyhow::{anyhow, Context, Result};
use lettre::message::Mailbox;
use std::fmt;

pub const ENV_EMAIL_USER: &str = "EMAIL_USER";
pub const ENV_EMAIL_PASS: &str = "EMAIL_PASS";
pub const ENV_EMAIL_TO: &str = "EMAIL_TO";

/// Sender account, its secret, and the recipient. All three are required.
#[derive(Clone)]
pub struct MailCredentials {
    /// Login name; also used as the `From` address.
    pub user: String,
    pub password: String,
    pub from: Mailbox,
    pub to: Mailbox,
}

impl MailCredentials {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve credentials through an arbitrary key lookup (env, map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| anyhow!("{key} missing"))
        };

        let user = required(ENV_EMAIL_USER)?;
        let password = required(ENV_EMAIL_PASS)?;
        let to_addr = required(ENV_EMAIL_TO)?;

        let from = user
            .parse::<Mailbox>()
            .with_context(|| format!("invalid {ENV_EMAIL_USER}"))?;
        let to = to_addr
            .parse::<Mailbox>()
            .with_context(|| format!("invalid {ENV_EMAIL_TO}"))?;

        Ok(Self {
            user,
            password,
            from,
            to,
        })
    }
}

// Never print the secret.
impl fmt::Debug for MailCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailCredentials")
            .field("user", &self.user)
            .field("password", &"***")
            .field("to", &self.to.to_string())
            .finish()
    }
}
