//! Tabular aggregation of per-day price records.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::anbima::TpfPriceRecord;

/// One (bond, trade day) observation with a guaranteed indicative rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceObservation {
    /// Asset-type code (e.g. `LTN`).
    pub asset_type: String,
    /// Contractual redemption date of the bond.
    pub maturity: NaiveDate,
    /// The business day this quote was published for.
    pub trade_date: NaiveDate,
    /// Indicative rate.
    pub rate: Decimal,
}

/// Append-only table of price observations, rebuilt fresh each run.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    rows: Vec<PriceObservation>,
}

impl PriceTable {
    /// Flatten per-day record batches into one table.
    ///
    /// Rows keep fetch order and are stamped with the requested trade
    /// date. Records without an indicative rate are dropped here so the
    /// calculator never sees a null rate.
    #[must_use]
    pub fn from_days(days: impl IntoIterator<Item = (NaiveDate, Vec<TpfPriceRecord>)>) -> Self {
        let mut rows = Vec::new();
        for (trade_date, records) in days {
            for record in records {
                match record.taxa_indicativa {
                    Some(rate) => rows.push(PriceObservation {
                        asset_type: record.tipo_titulo,
                        maturity: record.data_vencimento,
                        trade_date,
                        rate,
                    }),
                    None => tracing::debug!(
                        %trade_date,
                        asset_type = %record.tipo_titulo,
                        maturity = %record.data_vencimento,
                        "dropping record without indicative rate"
                    ),
                }
            }
        }
        Self { rows }
    }

    /// All observations in fetch order.
    #[must_use]
    pub fn rows(&self) -> &[PriceObservation] {
        &self.rows
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
