use crate::core::{RateEntry, RateSource, Result};
use crate::domain::model::ArchiveResponse;
use reqwest::Client;
use std::time::Duration;

/// HTTP adapter for the PrivatBank archive endpoint.
///
/// One GET per call, no retries. The `?json&date=` query shape is what the
/// archive expects, so the URL is assembled by hand rather than through
/// reqwest's query builder.
pub struct HttpRateSource {
    client: Client,
    endpoint: String,
}

impl HttpRateSource {
    pub fn new(endpoint: String, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait::async_trait]
impl RateSource for HttpRateSource {
    async fn fetch(&self, date: &str) -> Result<Vec<RateEntry>> {
        let url = format!("{}?json&date={}", self.endpoint, date);

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(&url).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let data: ArchiveResponse = response.json().await?;
        Ok(data.exchange_rate)
    }
}
