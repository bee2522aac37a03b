//! Trait for the external top-up provider

use async_trait::async_trait;

use crate::domain::{AccessToken, ClientCredentials, OperatorLookup, TopUpSubmission};
use crate::errors::ProviderError;

use super::types::ProviderReply;

/// Outbound calls to the airtime provider.
///
/// Implementations perform exactly one request per call. No retries and no
/// caching.
#[async_trait]
pub trait AirtimeProvider: Send + Sync {
    /// Exchange client credentials for a bearer token
    async fn request_token(
        &self,
        credentials: &ClientCredentials,
    ) -> Result<AccessToken, ProviderError>;

    /// Look up candidate operators for a phone number.
    ///
    /// The HTTP status is not inspected; only the JSON body matters.
    async fn find_operators(
        &self,
        token: &AccessToken,
        phone: &str,
    ) -> Result<OperatorLookup, ProviderError>;

    /// Submit the top-up and return the provider's answer as-is
    async fn submit_topup(
        &self,
        token: &AccessToken,
        submission: &TopUpSubmission,
    ) -> Result<ProviderReply, ProviderError>;
}

