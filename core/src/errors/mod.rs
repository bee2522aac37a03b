//! Domain-specific error types and error handling.

use thiserror::Error;

/// Failures of the top-up flow.
///
/// Each variant's message is the exact text returned to the caller.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Body must be JSON")]
    MalformedBody,

    #[error("phone & amount required")]
    MissingFields,

    #[error("Could not get Zendit token")]
    TokenUnavailable {
        #[source]
        source: ProviderError,
    },

    #[error("Could not detect carrier for this number")]
    CarrierNotDetected,

    #[error("Upstream provider request failed")]
    Upstream {
        stage: ProviderStage,
        #[source]
        source: ProviderError,
    },
}

impl DomainError {
    /// Request-shape errors are the caller's fault and never reach the provider
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::MalformedBody | DomainError::MissingFields | DomainError::CarrierNotDetected
        )
    }
}

/// Errors reported by an [`AirtimeProvider`](crate::services::topup::AirtimeProvider)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("provider responded with status {status}")]
    Status { status: u16 },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Which outbound call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderStage {
    Token,
    OperatorLookup,
    TopUp,
}

impl std::fmt::Display for ProviderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderStage::Token => write!(f, "token"),
            ProviderStage::OperatorLookup => write!(f, "operator_lookup"),
            ProviderStage::TopUp => write!(f, "topup"),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_facing_messages() {
        assert_eq!(DomainError::MalformedBody.to_string(), "Body must be JSON");
        assert_eq!(DomainError::MissingFields.to_string(), "phone & amount required");
        assert_eq!(
            DomainError::TokenUnavailable {
                source: ProviderError::Status { status: 401 }
            }
            .to_string(),
            "Could not get Zendit token"
        );
        assert_eq!(
            DomainError::CarrierNotDetected.to_string(),
            "Could not detect carrier for this number"
        );
    }

    #[test]
    fn test_upstream_keeps_source() {
        use std::error::Error as _;

        let err = DomainError::Upstream {
            stage: ProviderStage::OperatorLookup,
            source: ProviderError::Transport("connection reset".into()),
        };
        assert!(!err.is_client_error());
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("transport error: connection reset".to_string())
        );
    }

    #[test]
    fn test_client_error_classification() {
        assert!(DomainError::MalformedBody.is_client_error());
        assert!(DomainError::CarrierNotDetected.is_client_error());
        assert!(!DomainError::TokenUnavailable {
            source: ProviderError::InvalidResponse("no access_token".into())
        }
        .is_client_error());
    }
}
