//! ANBIMA adapter configuration.

use std::time::Duration;

/// Environment for the ANBIMA API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnbimaEnvironment {
    /// Sandbox environment (static sample data).
    #[default]
    Sandbox,
    /// Production environment (real market data).
    Production,
}

impl AnbimaEnvironment {
    /// Parse environment from string.
    #[must_use]
    pub fn from_str_case_insensitive(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Sandbox,
        }
    }

    /// Get the base URL for the price feed API.
    #[must_use]
    pub const fn feed_base_url(&self) -> &'static str {
        match self {
            Self::Sandbox => "https://api-sandbox.anbima.com.br",
            Self::Production => "https://api.anbima.com.br",
        }
    }

    /// Get the base URL for the OAuth token endpoint.
    ///
    /// The sandbox feed shares the production OAuth host.
    #[must_use]
    pub const fn auth_base_url(&self) -> &'static str {
        "https://api.anbima.com.br"
    }

    /// Check if this is the production environment.
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for AnbimaEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sandbox => write!(f, "SANDBOX"),
            Self::Production => write!(f, "PRODUCTION"),
        }
    }
}

/// Configuration for the ANBIMA API adapter.
#[derive(Debug, Clone)]
pub struct AnbimaConfig {
    /// API environment.
    pub environment: AnbimaEnvironment,
    /// Base URL for the OAuth token endpoint.
    pub auth_base_url: String,
    /// Base URL for the price feed API.
    pub feed_base_url: String,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl AnbimaConfig {
    /// Create a new configuration for the given environment.
    #[must_use]
    pub fn new(environment: AnbimaEnvironment) -> Self {
        Self {
            environment,
            auth_base_url: environment.auth_base_url().to_string(),
            feed_base_url: environment.feed_base_url().to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the OAuth base URL.
    #[must_use]
    pub fn with_auth_base_url(mut self, url: impl Into<String>) -> Self {
        self.auth_base_url = url.into();
        self
    }

    /// Override the price feed base URL.
    #[must_use]
    pub fn with_feed_base_url(mut self, url: impl Into<String>) -> Self {
        self.feed_base_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parsing() {
        assert_eq!(
            AnbimaEnvironment::from_str_case_insensitive("production"),
            AnbimaEnvironment::Production
        );
        assert_eq!(
            AnbimaEnvironment::from_str_case_insensitive("PROD"),
            AnbimaEnvironment::Production
        );
        assert_eq!(
            AnbimaEnvironment::from_str_case_insensitive("sandbox"),
            AnbimaEnvironment::Sandbox
        );
        assert_eq!(
            AnbimaEnvironment::from_str_case_insensitive("unknown"),
            AnbimaEnvironment::Sandbox
        );
    }

    #[test]
    fn sandbox_environment_urls() {
        let env = AnbimaEnvironment::Sandbox;
        assert!(env.feed_base_url().contains("sandbox"));
        assert!(!env.auth_base_url().contains("sandbox"));
        assert!(!env.is_production());
    }

    #[test]
    fn production_environment_urls() {
        let env = AnbimaEnvironment::Production;
        assert!(!env.feed_base_url().contains("sandbox"));
        assert!(env.is_production());
    }

    #[test]
    fn config_defaults() {
        let config = AnbimaConfig::new(AnbimaEnvironment::Sandbox);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.feed_base_url, "https://api-sandbox.anbima.com.br");
        assert_eq!(config.auth_base_url, "https://api.anbima.com.br");
    }

    #[test]
    fn config_overrides() {
        let config = AnbimaConfig::new(AnbimaEnvironment::Sandbox)
            .with_timeout(Duration::from_secs(5))
            .with_auth_base_url("http://localhost:9000")
            .with_feed_base_url("http://localhost:9001");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.auth_base_url, "http://localhost:9000");
        assert_eq!(config.feed_base_url, "http://localhost:9001");
    }

    #[test]
    fn environment_display() {
        assert_eq!(format!("{}", AnbimaEnvironment::Sandbox), "SANDBOX");
        assert_eq!(format!("{}", AnbimaEnvironment::Production), "PRODUCTION");
    }
}
