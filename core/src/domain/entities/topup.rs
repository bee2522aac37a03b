//! Inbound top-up request and the outbound submission built from it

use serde::Serialize;
use serde_json::Value;

use crate::domain::entities::operator::Operator;
use crate::domain::value_objects::amount::{normalize, Amount};
use crate::errors::{DomainError, DomainResult};

/// A validated top-up request: both fields were present and truthy.
#[derive(Debug, Clone, PartialEq)]
pub struct TopUpRequest {
    phone: String,
    amount: Amount,
}

impl TopUpRequest {
    pub fn new(phone: impl Into<String>, amount: Amount) -> Self {
        Self {
            phone: phone.into(),
            amount,
        }
    }

    /// Parse a raw request body.
    ///
    /// The body must be JSON. When it decodes to a JSON string, the string's
    /// text is decoded again, so a double-encoded body is accepted the same
    /// way as a plain one.
    pub fn parse(raw: &[u8]) -> DomainResult<Self> {
        let decoded: Value =
            serde_json::from_slice(raw).map_err(|_| DomainError::MalformedBody)?;
        let body = match decoded {
            Value::String(text) => {
                serde_json::from_str(&text).map_err(|_| DomainError::MalformedBody)?
            }
            other => other,
        };
        Self::from_body(&body)
    }

    /// Validate an already decoded body.
    pub fn from_body(body: &Value) -> DomainResult<Self> {
        let phone = body.get("phone").filter(|v| is_truthy(v));
        let amount = body.get("amount").filter(|v| is_truthy(v));

        let (Some(phone), Some(amount)) = (phone, amount) else {
            return Err(DomainError::MissingFields);
        };

        let phone = match phone {
            Value::String(s) => s.clone(),
            Value::Number(n) => normalize(n).unwrap_or_else(|| n.clone()).to_string(),
            _ => return Err(DomainError::MissingFields),
        };

        Ok(Self {
            phone,
            amount: Amount::coerce(amount),
        })
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn amount(&self) -> &Amount {
        &self.amount
    }
}

/// JS-style truthiness: `null`, `false`, `0`, `""` are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Body of the provider's top-up call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopUpSubmission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_id: Option<Value>,
    pub phone_number: String,
    pub amount: Amount,
    pub custom_identifier: String,
}

impl TopUpSubmission {
    pub fn new(
        operator: &Operator,
        request: &TopUpRequest,
        custom_identifier: impl Into<String>,
    ) -> Self {
        Self {
            operator_id: operator.operator_id().cloned(),
            phone_number: request.phone.clone(),
            amount: request.amount.clone(),
            custom_identifier: custom_identifier.into(),
        }
    }
}
