//! Types for the top-up service

use serde_json::Value;

/// Provider answer to a top-up submission
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderReply {
    /// HTTP status the provider answered with
    pub status: u16,
    /// Decoded JSON body, relayed verbatim to the caller
    pub body: Value,
}

impl ProviderReply {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// 2xx counts as success; the exact code is not passed on
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Result of a submitted top-up, successful or not
#[derive(Debug, Clone, PartialEq)]
pub struct TopUpOutcome {
    /// Whether the provider reported success
    pub accepted: bool,
    /// Provider's original status code, for logging only
    pub provider_status: u16,
    /// Correlation id sent with the submission
    pub custom_identifier: String,
    /// Provider payload
    pub body: Value,
}
