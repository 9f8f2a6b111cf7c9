//! Command-line interface.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::calendar::AnbimaCalendar;

/// Annualized volatility snapshot for ANBIMA secondary-market TPF quotes.
#[derive(Debug, Parser)]
#[command(name = "anbima-vol", version, about)]
pub struct Cli {
    /// First trade date of the range (YYYY-MM-DD); defaults to a trailing
    /// business-day window before the end date
    #[arg(long, value_name = "DATE")]
    pub start_date: Option<NaiveDate>,

    /// Last trade date of the range (YYYY-MM-DD); defaults to today
    #[arg(long, value_name = "DATE")]
    pub end_date: Option<NaiveDate>,

    /// Asset-type code to analyze (e.g. LTN, NTN-B)
    #[arg(long, default_value = "LTN")]
    pub asset_type: String,

    /// Trailing business-day window used when --start-date is absent
    #[arg(long, default_value_t = 10)]
    pub days: u32,

    /// Path to the JSON credentials file
    #[arg(long, default_value = "anbima-auth.json", value_name = "PATH")]
    pub credentials: PathBuf,

    /// API environment: sandbox or production
    #[arg(long, default_value = "sandbox", value_name = "ENV")]
    pub env: String,

    /// Trading days per year used to annualize daily volatility
    #[arg(long, default_value_t = 252)]
    pub trading_days: u32,
}

impl Cli {
    /// Resolve the requested trade-date range.
    ///
    /// Explicit dates win; otherwise the range is the trailing `--days`
    /// business-day window ending at `today`.
    #[must_use]
    pub fn resolve_range(&self, calendar: &AnbimaCalendar, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let end = self.end_date.unwrap_or(today);
        let start = self
            .start_date
            .unwrap_or_else(|| calendar.sub_business_days(end, self.days));
        (start, end)
    }
}
