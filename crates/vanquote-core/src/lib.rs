//! # Vanquote Core
//!
//! Fetches a delayed quote for one ticker, extracts the ask price and values
//! a position at that price.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Fetcher transport settings and environment overrides |
//! | [`domain`] | Ticker, request parameters, priced position |
//! | [`error`] | Validation and pipeline error taxonomy |
//! | [`http_client`] | HTTP client abstraction (reqwest-backed in production) |
//! | [`pipeline`] | The fetch → decode → value sequence |
//! | [`provider`] | Delayed-price endpoint, payload schema and decoder |
//! | [`result`] | The JSON result record printed by the CLI |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vanquote_core::{pipeline, FetcherConfig, QuoteFetcher, QuoteResult, ReqwestHttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FetcherConfig::from_env();
//!     let client = ReqwestHttpClient::from_config(&config)?;
//!     let fetcher = QuoteFetcher::new(Arc::new(client), config);
//!
//!     let outcome = pipeline::quote_position("VTI", 10.0, &fetcher).await;
//!     println!("{}", QuoteResult::from(&outcome).to_json_line()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! RequestParameters ──▶ QuoteFetcher ──▶ decode_ask_price ──▶ Position ──▶ QuoteResult
//!        │                   │                  │
//!        ▼                   ▼                  ▼
//!    Input error     Transport / Status /   Decode / NoQuote /
//!                        BodyRead              PriceParse
//! ```
//!
//! Every failure is terminal for the invocation; nothing is retried and no
//! partial result is ever produced.

pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod pipeline;
pub mod provider;
pub mod result;

pub use config::FetcherConfig;
pub use domain::{Position, RequestParameters, Ticker, DEFAULT_QUANTITY};
pub use error::{QuoteError, ValidationError};
pub use http_client::{
    HttpClient, HttpError, HttpErrorKind, HttpRequest, HttpResponse, ReqwestHttpClient,
};
pub use provider::QuoteFetcher;
pub use result::QuoteResult;
