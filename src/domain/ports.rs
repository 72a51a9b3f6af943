use crate::domain::model::RateEntry;
use crate::utils::error::Result;
use async_trait::async_trait;

/// A source of per-day exchange-rate entries, keyed by a DD.MM.YYYY date.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch(&self, date: &str) -> Result<Vec<RateEntry>>;
}
