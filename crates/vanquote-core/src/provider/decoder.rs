use log::warn;
use serde_json::Value;

use super::schema::DelayedPriceResponse;
use crate::{QuoteError, Ticker};

/// Decode a delayed-price body and return the first quote's ask price.
pub fn decode_ask_price(ticker: &Ticker, body: &str) -> Result<f64, QuoteError> {
    let response: DelayedPriceResponse =
        serde_json::from_str(body).map_err(|e| QuoteError::Decode(e.to_string()))?;

    let Some(quote) = response.quotes.first() else {
        return Err(QuoteError::NoQuote {
            ticker: ticker.to_string(),
            detail: provider_error_detail(&response.errors),
        });
    };

    if let Some(quoted) = quote.ticker.as_deref() {
        if !quoted.eq_ignore_ascii_case(ticker.as_str()) {
            warn!("provider answered for ticker '{quoted}' when '{ticker}' was requested");
        }
    }

    let raw = quote.ask_price().ok_or_else(|| {
        QuoteError::Decode(String::from(
            "first quote is missing equity.pricing.askPrice",
        ))
    })?;

    parse_price(raw)
}

/// Convert a provider decimal string. Malformed or non-finite input is an error, never zero.
pub fn parse_price(raw: &str) -> Result<f64, QuoteError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| QuoteError::PriceParse {
            value: raw.to_owned(),
            reason: e.to_string(),
        })?;

    if !value.is_finite() {
        return Err(QuoteError::PriceParse {
            value: raw.to_owned(),
            reason: String::from("not a finite number"),
        });
    }

    Ok(value)
}

fn provider_error_detail(errors: &[Value]) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let entries = errors
        .iter()
        .map(|error| match error {
            Value::String(message) => message.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join("; ");
    format!(" (provider errors: {entries})")
}
