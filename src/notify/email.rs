// src/notify/email.rs
use anyhow::{Context, Result};
use lettre::message::{header, Mailbox, Message};
use lettre::transport::smtp::{authentication::Credentials, AsyncSmtpTransport};
use lettre::{AsyncTransport, Tokio1Executor};

use super::Delivery;
use crate::config::{MailCredentials, MailSettings};

/// Plain-text report over authenticated SMTP submission with STARTTLS.
pub struct EmailSender {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
    subject: String,
}

impl EmailSender {
    /// Builds the transport only; no connection is made until `deliver`.
    pub fn new(settings: &MailSettings, creds: &MailCredentials) -> Result<Self> {
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.smtp_host)
            .with_context(|| format!("invalid smtp host {}", settings.smtp_host))?
            .port(settings.smtp_port)
            .credentials(Credentials::new(
                creds.user.clone(),
                creds.password.clone(),
            ))
            .build();

        Ok(Self {
            mailer,
            from: creds.from.clone(),
            to: creds.to.clone(),
            subject: settings.subject_line.clone(),
        })
    }

    pub fn build_message(&self, body: &str) -> Result<Message> {
        Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(self.subject.clone())
            .header(header::ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .context("build email")
    }
}

#[async_trait::async_trait]
impl Delivery for EmailSender {
    async fn deliver(&self, body: &str) -> Result<()> {
        let msg = self.build_message(body)?;
        self.mailer.send(msg).await.context("send email")?;
        tracing::info!(to = %self.to, bytes = body.len(), "report mailed");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "email"
    }
}
