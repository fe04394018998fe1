use serde::Serialize;

use crate::Ticker;

/// A priced holding: `balance = price * quantity`, unrounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position {
    pub ticker: Ticker,
    pub price: f64,
    pub quantity: f64,
    pub balance: f64,
}

impl Position {
    pub fn new(ticker: Ticker, price: f64, quantity: f64) -> Self {
        Self {
            ticker,
            price,
            quantity,
            balance: quantity * price,
        }
    }
}
