use crate::{Ticker, ValidationError};

pub const DEFAULT_QUANTITY: f64 = 1.0;

/// Resolved invocation input. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestParameters {
    ticker: Ticker,
    quantity: f64,
}

impl RequestParameters {
    pub fn new(ticker: &str, quantity: f64) -> Result<Self, ValidationError> {
        let ticker = Ticker::parse(ticker)?;
        if !quantity.is_finite() {
            return Err(ValidationError::NonFiniteQuantity {
                value: quantity.to_string(),
            });
        }

        Ok(Self { ticker, quantity })
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub const fn quantity(&self) -> f64 {
        self.quantity
    }
}
