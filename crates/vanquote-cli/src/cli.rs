//! CLI argument definitions for vanquote.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--ticker` | empty | Ticker to quote; empty is an input error |
//! | `--qty` | `1` | Quantity used to value the position |
//! | `--timeout-ms` | `10000` | Request timeout in ms |
//!
//! # Examples
//!
//! ```bash
//! vanquote --ticker VTI
//! vanquote --ticker VXUS --qty 12.5
//! RUST_LOG=debug vanquote --ticker VOO --timeout-ms 2000
//! ```

use clap::Parser;
use vanquote_core::config::DEFAULT_TIMEOUT_MS;
use vanquote_core::DEFAULT_QUANTITY;

/// Delayed-price position valuation.
///
/// Prints exactly one JSON object to stdout:
/// {"success":true,"ticker":..,"price":..,"quantity":..,"balance":..}
/// or {"success":false,"error":..}.
#[derive(Debug, Parser)]
#[command(
    name = "vanquote",
    author,
    version,
    about = "Value a stock position at its delayed ask price"
)]
pub struct Cli {
    /// Stock ticker symbol (e.g., VTI).
    #[arg(long, default_value = "")]
    pub ticker: String,

    /// Stock quantity.
    #[arg(long, default_value_t = DEFAULT_QUANTITY, allow_negative_numbers = true)]
    pub qty: f64,

    /// Request timeout budget in milliseconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,
}
