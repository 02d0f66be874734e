//! Twelve Data quote integration.
//!
//! API docs: https://twelvedata.com/docs#quote
//! Base URL: https://api.twelvedata.com
//! Auth: static API key as an `apikey` query parameter.
//! Free tier: 8 requests/minute, 800/day — one watchlist pass per
//! cycle stays well under this.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::QuoteSource;

const BASE_URL: &str = "https://api.twelvedata.com";
const SOURCE_NAME: &str = "twelvedata";

/// Twelve Data quote client.
pub struct TwelveDataClient {
    http: Client,
    base_url: String,
    exchange: String,
    api_key: String,
}

impl TwelveDataClient {
    pub fn new(api_key: String, exchange: String) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent("TOPFLOW/0.1.0 (flow-screening-bot)")
            .build()
            .context("Failed to build HTTP client for Twelve Data")?;

        Ok(Self {
            http,
            base_url: BASE_URL.to_string(),
            exchange,
            api_key,
        })
    }

    /// Point the client at a different endpoint base (tests use this
    /// to hit a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn quote_url(&self, symbol: &str) -> String {
        format!(
            "{}/quote?symbol={}&exchange={}&apikey={}",
            self.base_url,
            urlencoding::encode(symbol),
            urlencoding::encode(&self.exchange),
            self.api_key,
        )
    }
}

#[async_trait]
impl QuoteSource for TwelveDataClient {
    async fn fetch_raw(&self, symbol: &str) -> Result<String> {
        // The URL embeds the API key, so log the symbol only.
        debug!(symbol, "Fetching quote");

        let resp = self
            .http
            .get(self.quote_url(symbol))
            .send()
            .await
            .context("Twelve Data request failed")?;

        if !resp.status().is_success() {
            anyhow::bail!("Twelve Data API error {}", resp.status());
        }

        resp.text()
            .await
            .context("Failed to read Twelve Data response body")
    }

    fn name(&self) -> &str {
        SOURCE_NAME
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
