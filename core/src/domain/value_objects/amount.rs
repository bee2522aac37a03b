//! Top-up amount with loose numeric coercion
//!
//! Callers may send the amount as a number or as numeric text. The value is
//! converted once, before submission, and anything that does not convert is
//! carried as "not a number" and serialized as `null`. Range and currency
//! checks belong to the provider.

use serde::{Serialize, Serializer};
use serde_json::{Number, Value};

/// Largest integer an IEEE-754 double represents exactly (2^53 - 1)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A coerced amount. `None` means the input was not a number.
#[derive(Debug, Clone, PartialEq)]
pub struct Amount(Option<Number>);

impl Amount {
    /// Coerce an arbitrary JSON value to a number.
    pub fn coerce(value: &Value) -> Self {
        let number = match value {
            Value::Number(n) => normalize(n),
            Value::String(s) => parse_numeric_text(s),
            Value::Bool(true) => Some(Number::from(1)),
            Value::Bool(false) | Value::Null => Some(Number::from(0)),
            Value::Array(_) | Value::Object(_) => None,
        };
        Self(number)
    }

    pub fn is_nan(&self) -> bool {
        self.0.is_none()
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(Some(Number::from(value)))
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(n) => n.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(n) => write!(f, "{}", n),
            None => write!(f, "NaN"),
        }
    }
}

/// Integers as-is, whole floats as integers
pub(crate) fn normalize(n: &Number) -> Option<Number> {
    if n.is_i64() || n.is_u64() {
        return Some(n.clone());
    }
    n.as_f64().and_then(from_f64)
}

/// Whole floats in the exact range are emitted as integers so `10.0`
/// goes out as `10`. Non-finite values have no JSON form.
fn from_f64(v: f64) -> Option<Number> {
    if !v.is_finite() {
        return None;
    }
    if v.fract() == 0.0 && v.abs() <= MAX_EXACT_INTEGER {
        return Some(Number::from(v as i64));
    }
    Number::from_f64(v)
}

fn parse_numeric_text(text: &str) -> Option<Number> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(Number::from(0));
    }

    let lower = trimmed.to_ascii_lowercase();
    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = lower.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix).ok().map(Number::from);
        }
    }

    if let Ok(int) = trimmed.parse::<i64>() {
        return Some(Number::from(int));
    }

    // f64 parsing also accepts spellings like "inf" and "nan"; both end up
    // non-finite and therefore as "not a number".
    trimmed.parse::<f64>().ok().and_then(from_f64)
}
