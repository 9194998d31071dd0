use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

#[cfg(test)]
use mockall::automock;

const RATE_API_BASE: &str =
    "https://cdn.jsdelivr.net/gh/fawazahmed0/currency-api@1/latest/currencies";

/// Source of exchange rates: one unit of `from` expressed in `to`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RateProvider {
    async fn fetch_rate(&self, from: &str, to: &str) -> Result<f64>;
}

/// Rate client backed by the fawazahmed0 currency API on the jsDelivr CDN.
///
/// The endpoint takes no headers or auth; the response is a JSON object
/// mapping currency codes to per-unit rates relative to `from`.
pub struct CdnRateClient {
    client: Client,
    base_url: String,
}

impl CdnRateClient {
    pub fn new() -> Self {
        Self::with_base_url(RATE_API_BASE.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

impl Default for CdnRateClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateProvider for CdnRateClient {
    async fn fetch_rate(&self, from: &str, to: &str) -> Result<f64> {
        let url = format!("{}/{}/{}.json", self.base_url, from, to);
        debug!("requesting {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!(
                "Web Service returned {}, probably non-existent currency names",
                status
            );
        }

        let text = response.text().await.context("Failed to get response text")?;
        extract_rate(&text, to)
    }
}

/// Pull the `to`-keyed rate out of a response body. Only that single field
/// is read; the rest of the document is discarded.
fn extract_rate(body: &str, to: &str) -> Result<f64> {
    let document: serde_json::Value =
        serde_json::from_str(body).context("Failed to parse rate response")?;
    document
        .get(to)
        .and_then(serde_json::Value::as_f64)
        .with_context(|| format!("no rate for '{}' in response", to))
}
