//! ANBIMA API adapter.
//!
//! Token exchange against the OAuth endpoint plus the secondary-market TPF
//! price feed client. See <https://developers.anbima.com.br/en/> for the
//! provider documentation.

mod api_types;
mod auth;
mod client;
mod config;
mod error;

pub use api_types::{TokenResponse, TpfPriceRecord};
pub use auth::{Token, TokenManager};
pub use client::{AnbimaClient, TPF_SECONDARY_MARKET_PATH};
pub use config::{AnbimaConfig, AnbimaEnvironment};
pub use error::AnbimaError;
