//! Recording provider for tests
//!
//! Answers every call from canned data and records what it was asked, so
//! tests can assert which outbound calls happened and with what payload.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::{Mutex, PoisonError};

use crate::domain::{AccessToken, ClientCredentials, OperatorLookup, TopUpSubmission};
use crate::errors::ProviderError;

use super::traits::AirtimeProvider;
use super::types::ProviderReply;

/// A call the provider received
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderCall {
    Token { client_id: String },
    Operators { token: String, phone: String },
    TopUp { token: String, body: Value },
}

pub struct MockAirtimeProvider {
    token: Result<AccessToken, ProviderError>,
    operators: Result<Value, ProviderError>,
    topup: Result<ProviderReply, ProviderError>,
    calls: Mutex<Vec<ProviderCall>>,
}

impl Default for MockAirtimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAirtimeProvider {
    /// Happy path: token issued, one operator `OP1`, top-up accepted
    pub fn new() -> Self {
        Self {
            token: Ok(AccessToken::new("mock-token")),
            operators: Ok(json!({ "data": [{ "operatorId": "OP1", "name": "Mock Telecom" }] })),
            topup: Ok(ProviderReply::new(
                200,
                json!({ "status": "ACCEPTED", "transactionId": "mock-tx-1" }),
            )),
            calls: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_token_error(mut self, error: ProviderError) -> Self {
        self.token = Err(error);
        self
    }

    #[must_use]
    pub fn with_operators(mut self, body: Value) -> Self {
        self.operators = Ok(body);
        self
    }

    #[must_use]
    pub fn with_operators_error(mut self, error: ProviderError) -> Self {
        self.operators = Err(error);
        self
    }

    #[must_use]
    pub fn with_topup_reply(mut self, status: u16, body: Value) -> Self {
        self.topup = Ok(ProviderReply::new(status, body));
        self
    }

    #[must_use]
    pub fn with_topup_error(mut self, error: ProviderError) -> Self {
        self.topup = Err(error);
        self
    }

    /// Every call received, in order
    pub fn calls(&self) -> Vec<ProviderCall> {
        self.lock_calls().clone()
    }

    /// Bodies of the top-up submissions received
    pub fn submissions(&self) -> Vec<Value> {
        self.lock_calls()
            .iter()
            .filter_map(|call| match call {
                ProviderCall::TopUp { body, .. } => Some(body.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: ProviderCall) {
        self.lock_calls().push(call);
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<ProviderCall>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl AirtimeProvider for MockAirtimeProvider {
    async fn request_token(
        &self,
        credentials: &ClientCredentials,
    ) -> Result<AccessToken, ProviderError> {
        self.record(ProviderCall::Token {
            client_id: credentials.client_id.clone(),
        });
        self.token.clone()
    }

    async fn find_operators(
        &self,
        token: &AccessToken,
        phone: &str,
    ) -> Result<OperatorLookup, ProviderError> {
        self.record(ProviderCall::Operators {
            token: token.as_str().to_string(),
            phone: phone.to_string(),
        });
        self.operators.clone().map(OperatorLookup::new)
    }

    async fn submit_topup(
        &self,
        token: &AccessToken,
        submission: &TopUpSubmission,
    ) -> Result<ProviderReply, ProviderError> {
        let body = serde_json::to_value(submission)
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;
        self.record(ProviderCall::TopUp {
            token: token.as_str().to_string(),
            body,
        });
        self.topup.clone()
    }
}
