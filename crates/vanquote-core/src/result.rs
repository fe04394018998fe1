use serde::{Deserialize, Serialize, Serializer};

use crate::{Position, QuoteError};

/// The single JSON record printed per invocation.
///
/// `success` is always present. On success the position fields are set and
/// `error` is absent; on failure only `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub price: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub quantity: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub balance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QuoteResult {
    pub fn success(position: &Position) -> Self {
        Self {
            success: true,
            ticker: Some(position.ticker.to_string()),
            price: Some(position.price),
            quantity: Some(position.quantity),
            balance: Some(position.balance),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            ticker: None,
            price: None,
            quantity: None,
            balance: None,
            error: Some(message.into()),
        }
    }

    /// Compact, single-line JSON.
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Largest magnitude below which every integer is exactly representable in `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Whole numbers are written without a fractional part (`2`, not `2.0`).
fn serialize_number<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match *value {
        Some(number) if number.fract() == 0.0 && number.abs() < MAX_EXACT_INTEGER => {
            serializer.serialize_i64(number as i64)
        }
        Some(number) => serializer.serialize_f64(number),
        None => serializer.serialize_none(),
    }
}

impl From<&Result<Position, QuoteError>> for QuoteResult {
    fn from(outcome: &Result<Position, QuoteError>) -> Self {
        match outcome {
            Ok(position) => Self::success(position),
            Err(error) => Self::failure(error.to_string()),
        }
    }
}
