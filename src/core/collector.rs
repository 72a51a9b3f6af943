use crate::core::{DailyRecord, RateEntry, RateSource, Result, ResultSequence};
use crate::domain::model::{CurrencyQuote, DayRates};
use chrono::{Days, Local, NaiveDate};

const DATE_FORMAT: &str = "%d.%m.%Y";

pub fn format_date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Accumulates per-day EUR/USD records by querying a [`RateSource`] once per
/// date, today first, going backward.
pub struct RateCollector<S: RateSource> {
    source: S,
}

impl<S: RateSource> RateCollector<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Collects records for the last `days` days, starting from today.
    ///
    /// Fetches are sequential: each day's response is awaited and processed
    /// before the next request starts, so the output is date-descending.
    /// Days without usable data are skipped; a transport or decode failure
    /// aborts the whole run.
    ///
    /// The caller is expected to have bounds-checked `days` already (the CLI
    /// rejects anything outside 1..=10 before any I/O happens).
    pub async fn collect(&self, days: u32) -> Result<ResultSequence> {
        let today = Local::now().date_naive();
        let mut rates = Vec::new();

        for i in 0..days {
            let date = today - Days::new(u64::from(i));
            let date_key = format_date_key(date);

            let entries = self.source.fetch(&date_key).await?;

            if entries.is_empty() {
                tracing::info!("No data available for {}", date_key);
                continue;
            }

            // First occurrence wins if the archive ever repeats a currency.
            let eur = first_quote(&entries, "EUR");
            let usd = first_quote(&entries, "USD");

            match (eur, usd) {
                (Some(eur), Some(usd)) => {
                    rates.push(DailyRecord {
                        date: date_key,
                        rates: DayRates { eur, usd },
                    });
                }
                _ => {
                    tracing::debug!("Incomplete EUR/USD data for {}, skipping", date_key);
                }
            }
        }

        Ok(rates)
    }
}

fn first_quote(entries: &[RateEntry], code: &str) -> Option<CurrencyQuote> {
    entries
        .iter()
        .find(|e| e.currency.as_deref() == Some(code))
        .and_then(RateEntry::quote)
}
