use std::sync::Arc;

use log::debug;

use crate::config::FetcherConfig;
use crate::http_client::{HttpClient, HttpRequest, HttpResponse};
use crate::{QuoteError, Ticker};

/// Issues the single delayed-price GET for a ticker.
#[derive(Clone)]
pub struct QuoteFetcher {
    http_client: Arc<dyn HttpClient>,
    config: FetcherConfig,
}

impl QuoteFetcher {
    pub fn new(http_client: Arc<dyn HttpClient>, config: FetcherConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// `<base>/vmf/api/<ticker>/delayedPrice`, ticker interpolated without escaping.
    pub fn endpoint(&self, ticker: &Ticker) -> String {
        format!("{}/vmf/api/{}/delayedPrice", self.config.base_url, ticker)
    }

    pub fn request(&self, ticker: &Ticker) -> HttpRequest {
        HttpRequest::get(self.endpoint(ticker))
            .with_header("user-agent", self.config.user_agent.as_str())
            .with_header("accept", "application/json")
            .with_timeout_ms(self.config.timeout_ms)
    }

    /// Perform the call and reject non-2xx answers before any decoding.
    pub async fn fetch(&self, ticker: &Ticker) -> Result<HttpResponse, QuoteError> {
        let request = self.request(ticker);
        debug!("GET {}", request.url);

        let response = self.http_client.execute(request).await?;
        debug!(
            "quote provider answered status {} ({} bytes)",
            response.status,
            response.body.len()
        );

        if !response.is_success() {
            return Err(QuoteError::Status {
                status: response.status,
            });
        }

        Ok(response)
    }
}
