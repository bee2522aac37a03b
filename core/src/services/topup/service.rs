//! Main top-up service implementation

use std::sync::Arc;

use tu_shared::phone::mask_phone_number;

use crate::domain::{ClientCredentials, CustomIdentifierGenerator, TopUpRequest, TopUpSubmission};
use crate::errors::{DomainError, DomainResult, ProviderStage};

use super::traits::AirtimeProvider;
use super::types::TopUpOutcome;

/// Runs the token → carrier lookup → top-up pipeline
pub struct TopUpService<P: AirtimeProvider> {
    /// Provider client
    provider: Arc<P>,
    /// Credentials for the token exchange
    credentials: ClientCredentials,
    /// Shared across requests so ids stay unique
    id_generator: Arc<CustomIdentifierGenerator>,
}

impl<P: AirtimeProvider> TopUpService<P> {
    /// Create a new top-up service
    ///
    /// # Arguments
    ///
    /// * `provider` - Provider implementation
    /// * `credentials` - Client credentials resolved at startup
    pub fn new(provider: Arc<P>, credentials: ClientCredentials) -> Self {
        Self::with_id_generator(provider, credentials, Arc::new(CustomIdentifierGenerator::new()))
    }

    pub fn with_id_generator(
        provider: Arc<P>,
        credentials: ClientCredentials,
        id_generator: Arc<CustomIdentifierGenerator>,
    ) -> Self {
        Self {
            provider,
            credentials,
            id_generator,
        }
    }

    /// Submit a top-up for a validated request
    ///
    /// This method:
    /// 1. Exchanges the client credentials for a bearer token
    /// 2. Looks up operators for the phone number and takes the first one
    /// 3. Submits the top-up with a fresh `customIdentifier`
    ///
    /// # Returns
    ///
    /// * `Ok(TopUpOutcome)` - The provider answered the submission, with or without success
    /// * `Err(DomainError)` - A step failed before the provider could answer
    pub async fn execute(&self, request: TopUpRequest) -> DomainResult<TopUpOutcome> {
        let masked_phone = mask_phone_number(request.phone());

        let token = self
            .provider
            .request_token(&self.credentials)
            .await
            .map_err(|source| {
                tracing::warn!(
                    stage = %ProviderStage::Token,
                    error = %source,
                    "Token request failed"
                );
                DomainError::TokenUnavailable { source }
            })?;

        let lookup = self
            .provider
            .find_operators(&token, request.phone())
            .await
            .map_err(|source| {
                tracing::error!(
                    stage = %ProviderStage::OperatorLookup,
                    phone = %masked_phone,
                    error = %source,
                    "Operator lookup failed"
                );
                DomainError::Upstream {
                    stage: ProviderStage::OperatorLookup,
                    source,
                }
            })?;

        let candidates = lookup.candidate_count();
        let Some(operator) = lookup.first_match() else {
            tracing::info!(
                phone = %masked_phone,
                candidates,
                "No carrier detected for phone number"
            );
            return Err(DomainError::CarrierNotDetected);
        };

        let submission =
            TopUpSubmission::new(&operator, &request, self.id_generator.next_id());

        tracing::info!(
            phone = %masked_phone,
            candidates,
            operator_id = ?submission.operator_id,
            amount = %submission.amount,
            custom_identifier = %submission.custom_identifier,
            "Submitting top-up"
        );

        let reply = self
            .provider
            .submit_topup(&token, &submission)
            .await
            .map_err(|source| {
                tracing::error!(
                    stage = %ProviderStage::TopUp,
                    custom_identifier = %submission.custom_identifier,
                    error = %source,
                    "Top-up submission failed"
                );
                DomainError::Upstream {
                    stage: ProviderStage::TopUp,
                    source,
                }
            })?;

        let accepted = reply.is_success();
        if accepted {
            tracing::info!(
                custom_identifier = %submission.custom_identifier,
                provider_status = reply.status,
                "Top-up accepted by provider"
            );
        } else {
            tracing::warn!(
                custom_identifier = %submission.custom_identifier,
                provider_status = reply.status,
                "Top-up rejected by provider"
            );
        }

        Ok(TopUpOutcome {
            accepted,
            provider_status: reply.status,
            custom_identifier: submission.custom_identifier,
            body: reply.body,
        })
    }
}
