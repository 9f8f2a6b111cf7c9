//! ANBIMA Volatility Snapshot Binary
//!
//! Fetches secondary-market TPF quotes day by day over a business-day range
//! and prints annualized volatility per bond maturity.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p anbima-vol -- --asset-type LTN --days 10
//! cargo run -p anbima-vol -- --start-date 2024-07-01 --end-date 2024-07-31
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)
//!
//! A `.env` file in the working directory is honored.

use anbima_vol::anbima::{AnbimaClient, AnbimaConfig, AnbimaEnvironment, TpfPriceRecord};
use anbima_vol::calendar::AnbimaCalendar;
use anbima_vol::cli::Cli;
use anbima_vol::credentials::CredentialStore;
use anbima_vol::report;
use anbima_vol::table::PriceTable;
use anbima_vol::volatility::compute_volatility;
use chrono::{Local, NaiveDate};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_dotenv();
    init_tracing();

    let cli = Cli::parse();
    run(cli).await
}

/// Run the fetch-aggregate-report pipeline.
async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let calendar = AnbimaCalendar;
    let today = Local::now().date_naive();

    let (start, end) = cli.resolve_range(&calendar, today);
    if start > end {
        return Err("--start-date must not be after --end-date".into());
    }
    let dates = calendar.business_days(start, end);

    let environment = AnbimaEnvironment::from_str_case_insensitive(&cli.env);
    tracing::info!(
        %environment,
        %start,
        %end,
        business_days = dates.len(),
        asset_type = %cli.asset_type,
        "configuration loaded"
    );

    let store = CredentialStore::load(&cli.credentials)?;
    let config = AnbimaConfig::new(environment);
    let mut client = AnbimaClient::new(&config, store)?;

    let day_results = fetch_range(&mut client, &dates).await?;
    let table = PriceTable::from_days(day_results);
    tracing::info!(rows = table.len(), "price table built");

    let volatility = compute_volatility(&table, &cli.asset_type, cli.trading_days);
    if volatility.is_empty() {
        tracing::warn!(
            asset_type = %cli.asset_type,
            "not enough observations to compute volatility"
        );
    }
    report::print(&volatility);

    Ok(())
}

/// Fetch every business day in order, applying the skip-day policy.
///
/// Days that fail with a recoverable error contribute zero observations;
/// authentication failures abort the run.
async fn fetch_range(
    client: &mut AnbimaClient,
    dates: &[NaiveDate],
) -> Result<Vec<(NaiveDate, Vec<TpfPriceRecord>)>, Box<dyn std::error::Error>> {
    let mut day_results = Vec::with_capacity(dates.len());
    for date in dates {
        match client.fetch_day(*date).await {
            Ok(records) => {
                tracing::debug!(%date, rows = records.len(), "fetched day");
                day_results.push((*date, records));
            }
            Err(e) if e.is_fatal() => return Err(e.into()),
            Err(e) => {
                tracing::warn!(%date, error = %e, "no data for day, skipping");
                day_results.push((*date, Vec::new()));
            }
        }
    }
    Ok(day_results)
}

/// Load .env from the current directory, if present.
fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Initialize the tracing subscriber with environment filter.
///
/// Logs go to stderr so the report stays clean on stdout. Uses a static
/// directive string that is a compile-time constant guaranteed to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "anbima_vol=info"
                    .parse()
                    .expect("static directive 'anbima_vol=info' is valid"),
            ),
        )
        .with_writer(std::io::stderr)
        .init();
}
