//! Credential file handling for the ANBIMA API.
//!
//! The credentials file is a local JSON object holding `client_id` and
//! `client_secret`, plus an optional `token_info` block used to recycle a
//! still-valid access token across runs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or persisting the credentials file.
#[derive(Debug, Error)]
pub enum CredentialsError {
    /// Failed to read or write the credentials file.
    #[error("failed to access credentials file '{path}': {source}")]
    Io {
        /// Path to the credentials file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse or serialize the credentials JSON.
    #[error("invalid credentials JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required field is missing or empty.
    #[error("credentials field '{0}' is missing or empty")]
    MissingField(&'static str),
}

/// Cached access token persisted alongside the credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenInfo {
    /// The bearer token value.
    pub access_token: String,
    /// Expiry as Unix seconds (already includes the safety buffer).
    pub expires_at: i64,
}

/// On-disk shape of the credentials file.
#[derive(Clone, Serialize, Deserialize)]
struct CredentialsFile {
    client_id: String,
    client_secret: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token_info: Option<TokenInfo>,
}

/// Credential store backed by a local JSON file.
///
/// Loaded once at startup; the only mutation is the best-effort write-back
/// of a freshly obtained token.
#[derive(Clone)]
pub struct CredentialStore {
    path: PathBuf,
    file: CredentialsFile,
}

impl CredentialStore {
    /// Load and validate the credentials file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CredentialsError> {
        let path = path.as_ref().to_path_buf();
        let contents = std::fs::read_to_string(&path).map_err(|source| CredentialsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let file: CredentialsFile = serde_json::from_str(&contents)?;

        if file.client_id.is_empty() {
            return Err(CredentialsError::MissingField("client_id"));
        }
        if file.client_secret.is_empty() {
            return Err(CredentialsError::MissingField("client_secret"));
        }

        Ok(Self { path, file })
    }

    /// Get the client id.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.file.client_id
    }

    /// Get the client secret.
    #[must_use]
    pub fn client_secret(&self) -> &str {
        &self.file.client_secret
    }

    /// Get the cached token, if the file carries one.
    #[must_use]
    pub fn cached_token(&self) -> Option<&TokenInfo> {
        self.file.token_info.as_ref()
    }

    /// Persist a freshly obtained token back to the credentials file.
    pub fn store_token(&mut self, token: TokenInfo) -> Result<(), CredentialsError> {
        self.file.token_info = Some(token);
        let contents = serde_json::to_string_pretty(&self.file)?;
        std::fs::write(&self.path, contents).map_err(|source| CredentialsError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("path", &self.path)
            .field("client_id", &"[REDACTED]")
            .field("client_secret", &"[REDACTED]")
            .field("cached_token", &self.file.token_info.is_some())
            .finish()
    }
}
