use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Sale and purchase rates for one currency on one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrencyQuote {
    pub sale: f64,
    pub purchase: f64,
}

/// EUR and USD quotes for one date. Both must be present; a day with only
/// one of them never produces a record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayRates {
    #[serde(rename = "EUR")]
    pub eur: CurrencyQuote,
    #[serde(rename = "USD")]
    pub usd: CurrencyQuote,
}

/// One date (DD.MM.YYYY) mapped to its EUR/USD quotes.
///
/// Serializes as a single-key object, so a full collection run prints as an
/// array of `{ "<date>": { "EUR": ..., "USD": ... } }` mappings.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub date: String,
    pub rates: DayRates,
}

impl Serialize for DailyRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.date, &self.rates)?;
        map.end()
    }
}

/// Output of one collection run, most recent date first, with gaps for
/// days that had no usable data.
pub type ResultSequence = Vec<DailyRecord>;

/// One per-currency row of the archive response. Extra fields are ignored.
/// The archive also carries NB-only rows without sale/purchase values, so
/// every field is optional; an unusable row yields no quote.
#[derive(Debug, Clone, Deserialize)]
pub struct RateEntry {
    pub currency: Option<String>,
    #[serde(rename = "saleRate")]
    pub sale_rate: Option<f64>,
    #[serde(rename = "purchaseRate")]
    pub purchase_rate: Option<f64>,
}

impl RateEntry {
    pub fn quote(&self) -> Option<CurrencyQuote> {
        Some(CurrencyQuote {
            sale: self.sale_rate?,
            purchase: self.purchase_rate?,
        })
    }
}

/// Top-level archive response. A missing `exchangeRate` field deserializes
/// to an empty list, which the collector treats as "no data for this day".
#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveResponse {
    #[serde(rename = "exchangeRate", default)]
    pub exchange_rate: Vec<RateEntry>,
}
