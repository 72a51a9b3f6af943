pub mod collector;
pub mod fetcher;

pub use crate::domain::model::{DailyRecord, RateEntry, ResultSequence};
pub use crate::domain::ports::RateSource;
pub use crate::utils::error::Result;
