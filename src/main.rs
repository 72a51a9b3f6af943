use anyhow::Context;
use bank_rates::config::MAX_DAYS;
use bank_rates::utils::{logger, validation::Validate};
use bank_rates::{CliConfig, HttpRateSource, RateCollector};
use clap::Parser;
use std::io::{BufRead, Write};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // The canonical over-limit message goes to stdout, before any I/O.
    if config.days > MAX_DAYS {
        println!(
            "Error: You can only retrieve currency rates for the last {} days.",
            MAX_DAYS
        );
        std::process::exit(1);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let source = HttpRateSource::new(config.endpoint.clone(), config.timeout)
        .context("failed to build HTTP client")?;
    let collector = RateCollector::new(source);

    let rates = collector
        .collect(config.days)
        .await
        .context("failed to collect currency rates")?;

    tracing::info!(
        "Collected rates for {} of {} requested days",
        rates.len(),
        config.days
    );
    println!("{}", serde_json::to_string_pretty(&rates)?);

    if config.pause {
        print!("Press Enter to exit...");
        std::io::stdout().flush()?;
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
    }

    Ok(())
}
