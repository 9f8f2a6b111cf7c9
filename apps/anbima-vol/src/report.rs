//! Textual volatility report.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use chrono::NaiveDate;

/// Render the report: one line per maturity, ascending, six decimals.
#[must_use]
pub fn render(volatility: &BTreeMap<NaiveDate, f64>) -> String {
    let mut out = String::new();
    for (maturity, vol) in volatility {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{maturity}: {vol:.6}");
    }
    out
}

/// Print the report to stdout.
pub fn print(volatility: &BTreeMap<NaiveDate, f64>) {
    print!("{}", render(volatility));
}
