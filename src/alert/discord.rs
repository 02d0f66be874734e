//! Discord webhook delivery.
//!
//! Posts the cycle alert as `{"content": ...}` to a webhook URL.
//!
//! API docs: https://discord.com/developers/docs/resources/webhook
//! Auth: none beyond the webhook URL itself (treat it as a secret).

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use super::AlertSink;

const SINK_NAME: &str = "discord";

#[derive(Serialize)]
struct WebhookBody<'a> {
    content: &'a str,
}

/// Discord webhook alert sink.
pub struct DiscordWebhook {
    http: Client,
    url: String,
}

impl DiscordWebhook {
    pub fn new(url: String) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent("TOPFLOW/0.1.0 (flow-screening-bot)")
            .build()
            .context("Failed to build HTTP client for Discord webhook")?;

        Ok(Self { http, url })
    }
}

#[async_trait]
impl AlertSink for DiscordWebhook {
    async fn deliver(&self, content: &str) -> Result<()> {
        // serde_json escapes quotes and backslashes in the body; the
        // sanitizer upstream only guarantees the newline contract.
        let resp = self
            .http
            .post(&self.url)
            .json(&WebhookBody { content })
            .send()
            .await
            .context("Discord webhook request failed")?;

        if !resp.status().is_success() {
            anyhow::bail!("Discord webhook error {}", resp.status());
        }

        debug!(sink = SINK_NAME, "Alert delivered");
        Ok(())
    }

    fn name(&self) -> &str {
        SINK_NAME
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
