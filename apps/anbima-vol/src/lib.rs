// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines
    )
)]

//! ANBIMA secondary-market volatility snapshot.
//!
//! Retrieves historical secondary-market price quotes for Brazilian
//! government bonds (TPF) from the ANBIMA feed API, restricts the range to
//! ANBIMA-calendar business days, and reports annualized log-return
//! volatility per bond maturity.
//!
//! # Pipeline
//!
//! - [`credentials`]: local JSON credential file, with token recycling
//! - [`anbima`]: OAuth token exchange and the TPF price feed client
//! - [`calendar`]: ANBIMA banking calendar for Brazil
//! - [`table`]: per-day record batches flattened into one price table
//! - [`volatility`]: log-return volatility per maturity, annualized
//! - [`report`]: deterministic one-line-per-maturity output

pub mod anbima;
pub mod calendar;
pub mod cli;
pub mod credentials;
pub mod report;
pub mod table;
pub mod volatility;
