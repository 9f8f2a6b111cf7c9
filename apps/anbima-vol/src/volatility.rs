//! Annualized log-return volatility per bond maturity.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;

use crate::table::PriceTable;

/// Conventional trading-day count used to annualize daily volatility.
pub const DEFAULT_TRADING_DAYS_PER_YEAR: u32 = 252;

/// Compute annualized volatility per maturity for one asset type.
///
/// Observations are filtered by asset-type code, grouped by maturity and
/// sorted by trade date. The daily log-returns `ln(rate[i] / rate[i-1])`
/// feed a sample standard deviation (n−1 divisor) which is scaled by
/// `sqrt(trading_days_per_year)`.
///
/// Maturities yielding fewer than two valid log-returns are omitted from
/// the result rather than reported as zero or NaN. Return pairs where
/// either rate is non-positive are skipped.
#[must_use]
pub fn compute_volatility(
    table: &PriceTable,
    asset_type: &str,
    trading_days_per_year: u32,
) -> BTreeMap<NaiveDate, f64> {
    let mut by_maturity: BTreeMap<NaiveDate, Vec<(NaiveDate, f64)>> = BTreeMap::new();
    for row in table.rows() {
        if row.asset_type != asset_type {
            continue;
        }
        if let Some(rate) = row.rate.to_f64() {
            by_maturity
                .entry(row.maturity)
                .or_default()
                .push((row.trade_date, rate));
        }
    }

    let annualization = f64::from(trading_days_per_year).sqrt();
    let mut result = BTreeMap::new();
    for (maturity, mut series) in by_maturity {
        series.sort_by_key(|(trade_date, _)| *trade_date);
        let returns = log_returns(&series);
        if let Some(sigma) = std_dev(&returns) {
            result.insert(maturity, sigma * annualization);
        }
    }
    result
}

/// Log-returns across consecutive observations, skipping non-positive
/// rate pairs.
fn log_returns(series: &[(NaiveDate, f64)]) -> Vec<f64> {
    series
        .windows(2)
        .filter_map(|pair| {
            let previous = pair[0].1;
            let current = pair[1].1;
            (previous > 0.0 && current > 0.0).then(|| (current / previous).ln())
        })
        .collect()
}

/// Mean of a slice of samples.
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n−1 divisor).
fn std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let avg = mean(values)?;
    let variance = values.iter().map(|v| (v - avg) * (v - avg)).sum::<f64>()
        / (values.len() - 1) as f64;

    Some(variance.sqrt())
}
