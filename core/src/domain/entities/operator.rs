//! Mobile operator (carrier) as returned by the provider's lookup endpoint

use serde_json::{Map, Value};

/// A carrier candidate. Provider fields are kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    fields: Map<String, Value>,
}

impl Operator {
    /// Wrap a lookup entry. Only JSON objects describe an operator.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Identifier to submit with the top-up.
    ///
    /// `operatorId` wins when present and non-null, otherwise `id`.
    pub fn operator_id(&self) -> Option<&Value> {
        self.non_null("operatorId").or_else(|| self.non_null("id"))
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    fn non_null(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }
}

/// Raw body of an operator lookup. Candidates live under `data`.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorLookup {
    body: Value,
}

impl OperatorLookup {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// Number of candidates the provider returned
    pub fn candidate_count(&self) -> usize {
        self.body
            .get("data")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// First-match policy: index 0 of `data`, no scoring or tie-break.
    ///
    /// Absent, non-array or empty `data` yields `None`, as does a first
    /// entry that is not an object.
    pub fn first_match(self) -> Option<Operator> {
        match self.body {
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Array(candidates)) => {
                    candidates.into_iter().next().and_then(Operator::from_value)
                }
                _ => None,
            },
            _ => None,
        }
    }
}
