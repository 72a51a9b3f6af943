pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::{collector::RateCollector, fetcher::HttpRateSource};
pub use domain::model::{CurrencyQuote, DailyRecord, DayRates, ResultSequence};
pub use domain::ports::RateSource;
pub use utils::error::{RatesError, Result};
