use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use clap::Parser;

/// The archive only serves the last 10 days.
pub const MAX_DAYS: u32 = 10;

pub const DEFAULT_ENDPOINT: &str = "https://api.privatbank.ua/p24api/exchange_rates";

#[derive(Debug, Clone, Parser)]
#[command(name = "bank-rates")]
#[command(about = "Get EUR/USD currency rates from the PrivatBank archive API")]
pub struct CliConfig {
    /// Number of past days to retrieve, starting from today (1-10)
    pub days: u32,

    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, default_value = "30", help = "Per-request timeout in seconds")]
    pub timeout: u64,

    #[arg(long, help = "Wait for Enter before exiting")]
    pub pause: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_range("days", self.days, 1, MAX_DAYS)?;
        validate_range("timeout", self.timeout, 1, 300)?;
        validate_url("endpoint", &self.endpoint)?;
        Ok(())
    }
}
