//! # Infrastructure Layer
//!
//! Concrete implementations of the core's outbound ports. Today that is a
//! single provider: the Zendit airtime API, reached over HTTPS with
//! `reqwest`.

use tu_core::errors::ProviderError;

/// Zendit airtime provider client
pub mod zendit;

pub use zendit::{ZenditClient, ZenditConfig};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the JSON we expected
    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// Provider answered with a non-success status
    #[error("Provider responded with status {0}")]
    Status(u16),

    /// Token response without a usable `access_token`
    #[error("Token response did not contain an access_token")]
    MissingAccessToken,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for ProviderError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Status(status) => ProviderError::Status { status },
            InfrastructureError::Json(_) | InfrastructureError::MissingAccessToken => {
                ProviderError::InvalidResponse(err.to_string())
            }
            InfrastructureError::Http(_) | InfrastructureError::Config(_) => {
                ProviderError::Transport(err.to_string())
            }
        }
    }
}
