//! Delayed-price provider: outbound request and response decoding.

pub mod decoder;
pub mod fetcher;
pub mod schema;

pub use decoder::{decode_ask_price, parse_price};
pub use fetcher::QuoteFetcher;
pub use schema::{DelayedPriceResponse, DelayedQuote, Equity, Pricing};
