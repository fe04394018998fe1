//! Subset of the delayed-price payload needed to reach the ask price.
//!
//! The upstream document carries dozens of descriptive fields (cusip,
//! trading dates, volume, exchanges, ...). They are ignored during decoding;
//! only the path `quotes[0].equity.pricing.askPrice` is load-bearing.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelayedPriceResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub quotes: Vec<DelayedQuote>,
    /// Free-form provider diagnostics, surfaced only when no quote came back.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<Value>,
}

/// Lists may arrive as `null`; treat that exactly like a missing key.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelayedQuote {
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub equity: Option<Equity>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equity {
    #[serde(default)]
    pub pricing: Option<Pricing>,
}

/// Prices arrive as decimal strings, not JSON numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    #[serde(default)]
    pub ask_price: Option<String>,
}

impl DelayedQuote {
    pub fn ask_price(&self) -> Option<&str> {
        self.equity
            .as_ref()?
            .pricing
            .as_ref()?
            .ask_price
            .as_deref()
    }
}
