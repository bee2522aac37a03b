//! Zendit client configuration

use std::fmt;
use validator::Validate;

use tu_core::domain::ClientCredentials;

use crate::InfrastructureError;

pub const DEFAULT_AUTH_URL: &str = "https://auth.zendit.io";
pub const DEFAULT_API_URL: &str = "https://api.zendit.io";

/// Zendit configuration
///
/// The credentials are read here once, at startup, and handed to the top-up
/// service via [`ZenditConfig::credentials`]. [`ZenditClient`](super::ZenditClient)
/// keeps only the endpoints and timeout; it receives credentials per call.
#[derive(Clone, Validate)]
pub struct ZenditConfig {
    /// OAuth client id (`ZENDIT_ID`)
    pub client_id: String,
    /// OAuth client secret (`ZENDIT_SECRET`)
    pub client_secret: String,
    /// Base URL of the token service
    #[validate(url)]
    pub auth_url: String,
    /// Base URL of the airtime API
    #[validate(url)]
    pub api_url: String,
    /// Per-call timeout; `None` leaves requests unbounded
    pub request_timeout_secs: Option<u64>,
}

impl Default for ZenditConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl ZenditConfig {
    /// Create configuration from environment variables
    ///
    /// Missing credentials are not an error here: they default to empty and
    /// the token endpoint rejects them on first use.
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let client_id = std::env::var("ZENDIT_ID").unwrap_or_default();
        let client_secret = std::env::var("ZENDIT_SECRET").unwrap_or_default();

        let request_timeout_secs = match std::env::var("ZENDIT_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => Some(raw.trim().parse().map_err(|_| {
                InfrastructureError::Config(format!(
                    "ZENDIT_REQUEST_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    raw
                ))
            })?),
            Err(_) => None,
        };

        let config = Self {
            client_id,
            client_secret,
            auth_url: std::env::var("ZENDIT_AUTH_URL")
                .unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string()),
            api_url: std::env::var("ZENDIT_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            request_timeout_secs,
        };
        config.check()?;
        Ok(config)
    }

    /// Point both services at other hosts (sandbox, local fakes)
    #[must_use]
    pub fn with_base_urls(mut self, auth_url: impl Into<String>, api_url: impl Into<String>) -> Self {
        self.auth_url = auth_url.into();
        self.api_url = api_url.into();
        self
    }

    #[must_use]
    pub fn with_credentials(mut self, client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self.client_secret = client_secret.into();
        self
    }

    /// Same endpoints and timeout, credentials cleared
    #[must_use]
    pub fn without_credentials(mut self) -> Self {
        self.client_id.clear();
        self.client_secret.clear();
        self
    }

    /// Validate URLs
    pub fn check(&self) -> Result<(), InfrastructureError> {
        self.validate()
            .map_err(|e| InfrastructureError::Config(format!("invalid Zendit configuration: {}", e)))
    }

    pub fn credentials(&self) -> ClientCredentials {
        ClientCredentials::new(self.client_id.clone(), self.client_secret.clone())
    }

    pub fn token_url(&self) -> String {
        format!("{}/oauth/token", self.auth_url.trim_end_matches('/'))
    }

    pub fn operators_url(&self) -> String {
        format!("{}/v1/airtime/operators", self.api_url.trim_end_matches('/'))
    }

    pub fn topups_url(&self) -> String {
        format!("{}/v1/airtime/topups", self.api_url.trim_end_matches('/'))
    }
}

impl fmt::Debug for ZenditConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZenditConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("auth_url", &self.auth_url)
            .field("api_url", &self.api_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
