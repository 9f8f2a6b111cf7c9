//! Token management for the ANBIMA OAuth endpoint.
//!
//! Tokens are obtained with the client-credentials grant and recycled
//! across runs through the credentials file when still valid.

use chrono::{DateTime, Duration, Utc};
use reqwest::Client;

use super::api_types::TokenResponse;
use super::config::AnbimaConfig;
use super::error::AnbimaError;
use crate::credentials::{CredentialStore, TokenInfo};

/// Safety margin subtracted from the provider-reported token lifetime.
const EXPIRY_BUFFER_SECS: i64 = 60;

/// A bearer token with its expiry instant.
#[derive(Clone)]
pub struct Token {
    value: String,
    expires_at: DateTime<Utc>,
}

impl Token {
    /// Get the bearer value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the token is still usable at the given instant.
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    /// Rebuild a token from the persisted cache entry.
    fn from_cached(info: &TokenInfo) -> Option<Self> {
        let expires_at = DateTime::from_timestamp(info.expires_at, 0)?;
        Some(Self {
            value: info.access_token.clone(),
            expires_at,
        })
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("value", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Exchanges client credentials for bearer tokens.
///
/// Holds at most one token for the process lifetime; the caller decides
/// when to invalidate it (e.g. after the feed rejects it).
pub struct TokenManager {
    http: Client,
    auth_base_url: String,
    store: CredentialStore,
    token: Option<Token>,
}

impl TokenManager {
    /// Create a manager, picking up an unexpired cached token if present.
    #[must_use]
    pub fn new(http: Client, config: &AnbimaConfig, store: CredentialStore) -> Self {
        let token = store
            .cached_token()
            .and_then(Token::from_cached)
            .filter(|token| token.is_valid_at(Utc::now()));
        if token.is_some() {
            tracing::debug!("reusing cached access token");
        }
        Self {
            http,
            auth_base_url: config.auth_base_url.clone(),
            store,
            token,
        }
    }

    /// Client id sent alongside the token on feed requests.
    #[must_use]
    pub fn client_id(&self) -> &str {
        self.store.client_id()
    }

    /// A valid bearer value, performing the token exchange first if needed.
    pub async fn access_token(&mut self) -> Result<String, AnbimaError> {
        if let Some(token) = &self.token {
            if token.is_valid_at(Utc::now()) {
                return Ok(token.value().to_string());
            }
            tracing::debug!("access token expired");
        }
        self.authenticate().await
    }

    /// Drop the held token so the next request re-authenticates.
    pub fn invalidate(&mut self) {
        self.token = None;
    }

    /// Exchange credentials for a fresh token and persist it.
    async fn authenticate(&mut self) -> Result<String, AnbimaError> {
        let url = format!("{}/oauth/access-token", self.auth_base_url);

        let response = self
            .http
            .post(&url)
            .basic_auth(self.store.client_id(), Some(self.store.client_secret()))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| AnbimaError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnbimaError::AuthenticationFailed {
                status: status.as_u16(),
                body,
            });
        }

        let payload: TokenResponse = response
            .json()
            .await
            .map_err(|e| AnbimaError::JsonParse(e.to_string()))?;

        let expires_at = Utc::now() + Duration::seconds(payload.expires_in - EXPIRY_BUFFER_SECS);
        let token = Token {
            value: payload.access_token,
            expires_at,
        };

        // Write-back is best effort; a read-only credentials file must not
        // fail the run.
        if let Err(e) = self.store.store_token(TokenInfo {
            access_token: token.value.clone(),
            expires_at: expires_at.timestamp(),
        }) {
            tracing::warn!(error = %e, "failed to persist access token");
        }

        tracing::info!(expires_at = %expires_at, "authenticated against ANBIMA");
        let value = token.value.clone();
        self.token = Some(token);
        Ok(value)
    }
}
