use thiserror::Error;

use crate::http_client::{HttpError, HttpErrorKind};

/// Input validation errors raised while resolving request parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No stock ticker provided.")]
    EmptyTicker,
    #[error("quantity must be a finite number, got '{value}'")]
    NonFiniteQuantity { value: String },
}

/// Every way a quote invocation can fail. All variants are terminal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuoteError {
    #[error(transparent)]
    Input(#[from] ValidationError),

    #[error("quote request failed: {0}")]
    Transport(String),

    #[error("quote provider returned HTTP status {status}")]
    Status { status: u16 },

    #[error("could not read quote response body: {0}")]
    BodyRead(String),

    #[error("could not decode quote response JSON: {0}")]
    Decode(String),

    #[error("no quote data available for ticker '{ticker}'{detail}")]
    NoQuote { ticker: String, detail: String },

    #[error("could not parse ask price '{value}': {reason}")]
    PriceParse { value: String, reason: String },
}

impl QuoteError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Input(_) => "input.invalid",
            Self::Transport(_) => "transport.failed",
            Self::Status { .. } => "provider.status",
            Self::BodyRead(_) => "body.read",
            Self::Decode(_) => "decode.failed",
            Self::NoQuote { .. } => "quote.missing",
            Self::PriceParse { .. } => "price.parse",
        }
    }

    /// True when the failure happened before any network access.
    pub const fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}

impl From<HttpError> for QuoteError {
    fn from(error: HttpError) -> Self {
        match error.kind() {
            HttpErrorKind::Body => Self::BodyRead(error.message().to_owned()),
            HttpErrorKind::Request | HttpErrorKind::Connect | HttpErrorKind::Timeout => {
                Self::Transport(error.message().to_owned())
            }
        }
    }
}
