//! Zendit Airtime API client
//!
//! Implements [`AirtimeProvider`] against Zendit's public endpoints:
//!
//! - `POST {auth}/oauth/token` - client-credentials grant, form-encoded
//! - `GET {api}/v1/airtime/operators?phoneNumber=...` - carrier lookup
//! - `POST {api}/v1/airtime/topups` - top-up submission
//!
//! One request per call, no retries. Phone numbers are masked in logs and
//! tokens are never logged.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

use tu_core::domain::{AccessToken, ClientCredentials, OperatorLookup, TopUpSubmission};
use tu_core::errors::ProviderError;
use tu_core::services::{AirtimeProvider, ProviderReply};
use tu_shared::phone::mask_phone_number;

use crate::zendit::config::ZenditConfig;
use crate::InfrastructureError;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Zendit provider client
pub struct ZenditClient {
    http: reqwest::Client,
    config: ZenditConfig,
}

impl ZenditClient {
    /// Create a new client; validates the configuration first.
    ///
    /// Credentials in `config` are dropped: the token call uses the
    /// [`ClientCredentials`] it is given.
    pub fn new(config: ZenditConfig) -> Result<Self, InfrastructureError> {
        config.check()?;
        let config = config.without_credentials();

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        info!(
            auth_url = %config.auth_url,
            api_url = %config.api_url,
            timeout_secs = ?config.request_timeout_secs,
            "Zendit client initialized"
        );

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ZenditConfig {
        &self.config
    }

    async fn fetch_token(
        &self,
        credentials: &ClientCredentials,
    ) -> Result<AccessToken, InfrastructureError> {
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
        ];

        let response = self
            .http
            .post(self.config.token_url())
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Zendit token endpoint rejected the request");
            return Err(InfrastructureError::Status(status.as_u16()));
        }

        let body: TokenResponse = serde_json::from_slice(&response.bytes().await?)?;
        let token = body
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or(InfrastructureError::MissingAccessToken)?;

        debug!("Zendit access token obtained");
        Ok(AccessToken::new(token))
    }

    async fn fetch_operators(
        &self,
        token: &AccessToken,
        phone: &str,
    ) -> Result<OperatorLookup, InfrastructureError> {
        let response = self
            .http
            .get(self.config.operators_url())
            .query(&[("phoneNumber", phone)])
            .bearer_auth(token.as_str())
            .send()
            .await?;

        // Status is not checked: an error payload has no `data` list and
        // ends up as "carrier not detected".
        debug!(
            phone = %mask_phone_number(phone),
            status = response.status().as_u16(),
            "Zendit operator lookup answered"
        );

        let body: Value = serde_json::from_slice(&response.bytes().await?)?;
        Ok(OperatorLookup::new(body))
    }

    async fn post_topup(
        &self,
        token: &AccessToken,
        submission: &TopUpSubmission,
    ) -> Result<ProviderReply, InfrastructureError> {
        let response = self
            .http
            .post(self.config.topups_url())
            .bearer_auth(token.as_str())
            .json(submission)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body: Value = serde_json::from_slice(&response.bytes().await?)?;

        debug!(
            status,
            custom_identifier = %submission.custom_identifier,
            "Zendit top-up answered"
        );
        Ok(ProviderReply::new(status, body))
    }
}

#[async_trait]
impl AirtimeProvider for ZenditClient {
    async fn request_token(
        &self,
        credentials: &ClientCredentials,
    ) -> Result<AccessToken, ProviderError> {
        Ok(self.fetch_token(credentials).await?)
    }

    async fn find_operators(
        &self,
        token: &AccessToken,
        phone: &str,
    ) -> Result<OperatorLookup, ProviderError> {
        Ok(self.fetch_operators(token, phone).await?)
    }

    async fn submit_topup(
        &self,
        token: &AccessToken,
        submission: &TopUpSubmission,
    ) -> Result<ProviderReply, ProviderError> {
        Ok(self.post_topup(token, submission).await?)
    }
}
