//! ANBIMA API request and response types.
//!
//! These types map directly to the provider's REST API format.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Response from the OAuth token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// The bearer token value.
    pub access_token: String,
    /// Token lifetime in seconds.
    #[serde(default = "default_expires_in")]
    pub expires_in: i64,
}

const fn default_expires_in() -> i64 {
    3600
}

/// One secondary-market TPF price record from the feed.
///
/// The feed returns one record per bond per reference date. Only
/// `tipo_titulo`, `data_vencimento` and `taxa_indicativa` feed the
/// volatility computation; the remaining fields are carried for logging
/// and future analyses.
#[derive(Debug, Clone, Deserialize)]
pub struct TpfPriceRecord {
    /// Asset-type code (e.g. `LTN`, `NTN-B`).
    pub tipo_titulo: String,
    /// Contractual redemption date of the bond.
    pub data_vencimento: NaiveDate,
    /// SELIC code of the bond.
    #[serde(default)]
    pub codigo_selic: Option<String>,
    /// ISIN of the bond.
    #[serde(default)]
    pub codigo_isin: Option<String>,
    /// Published buy-side rate.
    #[serde(default)]
    pub taxa_compra: Option<Decimal>,
    /// Published sell-side rate.
    #[serde(default)]
    pub taxa_venda: Option<Decimal>,
    /// Indicative rate, the input to the volatility computation.
    #[serde(default)]
    pub taxa_indicativa: Option<Decimal>,
    /// Unit price.
    #[serde(default)]
    pub pu: Option<Decimal>,
}
