//! Price feed client for the secondary-market TPF endpoint.

use chrono::NaiveDate;
use reqwest::{Client, Response, StatusCode};

use super::api_types::TpfPriceRecord;
use super::auth::TokenManager;
use super::config::AnbimaConfig;
use super::error::AnbimaError;
use crate::credentials::CredentialStore;

/// Fixed path of the secondary-market TPF price feed.
pub const TPF_SECONDARY_MARKET_PATH: &str =
    "/feed/precos-indices/v1/titulos-publicos/mercado-secundario-TPF";

/// Date format expected by the feed's `data` query parameter.
const DATE_QUERY_FORMAT: &str = "%Y-%m-%d";

/// HTTP client for the ANBIMA price feed.
pub struct AnbimaClient {
    http: Client,
    feed_base_url: String,
    auth: TokenManager,
}

impl AnbimaClient {
    /// Create a new client from config and credentials.
    pub fn new(config: &AnbimaConfig, store: CredentialStore) -> Result<Self, AnbimaError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AnbimaError::Http(e.to_string()))?;
        let auth = TokenManager::new(http.clone(), config, store);

        Ok(Self {
            http,
            feed_base_url: config.feed_base_url.clone(),
            auth,
        })
    }

    /// Fetch the price records for one business day.
    ///
    /// A rejected token triggers exactly one re-authentication retry; a
    /// second rejection surfaces as `AuthenticationFailed`. Non-auth
    /// failures map to the per-day error variants so the caller can apply
    /// the skip-day policy.
    pub async fn fetch_day(&mut self, date: NaiveDate) -> Result<Vec<TpfPriceRecord>, AnbimaError> {
        let mut response = self.request_day(date).await?;

        if is_auth_rejection(response.status()) {
            tracing::warn!(
                %date,
                status = response.status().as_u16(),
                "access token rejected, re-authenticating"
            );
            self.auth.invalidate();
            response = self.request_day(date).await?;
        }

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AnbimaError::Network(e.to_string()))?;

        if is_auth_rejection(status) {
            return Err(AnbimaError::AuthenticationFailed {
                status: status.as_u16(),
                body,
            });
        }
        if !status.is_success() {
            return Err(AnbimaError::Api {
                status: status.as_u16(),
                body,
            });
        }

        parse_records(&body)
    }

    /// Issue the authenticated GET for one reference date.
    async fn request_day(&mut self, date: NaiveDate) -> Result<Response, AnbimaError> {
        let token = self.auth.access_token().await?;
        let url = format!("{}{}", self.feed_base_url, TPF_SECONDARY_MARKET_PATH);

        self.http
            .get(&url)
            .query(&[("data", date.format(DATE_QUERY_FORMAT).to_string())])
            .header("client_id", self.auth.client_id())
            .header("access_token", token)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| AnbimaError::Network(e.to_string()))
    }
}

/// Whether the status means the token was rejected.
fn is_auth_rejection(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
    )
}

/// Decode a feed body into price records.
///
/// The feed normally answers with a JSON array; a bare object is accepted
/// as a one-element batch. Individual records that fail to decode are
/// dropped, not fatal.
fn parse_records(body: &str) -> Result<Vec<TpfPriceRecord>, AnbimaError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| AnbimaError::JsonParse(e.to_string()))?;

    let items = match value {
        serde_json::Value::Array(items) => items,
        other => vec![other],
    };

    let mut records = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<TpfPriceRecord>(item) {
            Ok(record) => records.push(record),
            Err(e) => tracing::debug!(error = %e, "dropping malformed price record"),
        }
    }
    Ok(records)
}
