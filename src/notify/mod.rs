// src/notify/mod.rs
pub mod email;

use anyhow::Result;
use std::io::Write;

/// Hands a finished report body to the outside world.
#[async_trait::async_trait]
pub trait Delivery {
    async fn deliver(&self, body: &str) -> Result<()>;
    fn name(&self) -> &'static str;
}

/// Writes the body to stdout. Used by the preview binary.
pub struct StdoutDelivery;

#[async_trait::async_trait]
impl Delivery for StdoutDelivery {
    async fn deliver(&self, body: &str) -> Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{body}")?;
        out.flush()?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "stdout"
    }
}
