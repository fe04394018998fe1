//! Shared test doubles for the behaviour suites.

#![allow(dead_code)]

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use vanquote_core::{
    FetcherConfig, HttpClient, HttpError, HttpRequest, HttpResponse, QuoteFetcher,
};

pub const VTI_RESPONSE: &str = include_str!("../fixtures/delayed_price_vti.json");
pub const EMPTY_RESPONSE: &str = include_str!("../fixtures/delayed_price_empty.json");

/// Transport double that replays one canned outcome and records every request.
#[derive(Debug)]
pub struct RecordingHttpClient {
    response: Result<HttpResponse, HttpError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingHttpClient {
    pub fn responding(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(HttpResponse::with_status(status, body)),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn ok(body: &str) -> Arc<Self> {
        Self::responding(200, body)
    }

    pub fn failing(error: HttpError) -> Arc<Self> {
        Arc::new(Self {
            response: Err(error),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.recorded_requests().len()
    }
}

impl HttpClient for RecordingHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

pub fn fetcher_for(client: &Arc<RecordingHttpClient>) -> QuoteFetcher {
    QuoteFetcher::new(client.clone(), FetcherConfig::default())
}

/// Provider body carrying a single quote with the given ask price string.
pub fn single_quote_body(ticker: &str, ask_price: &str) -> String {
    serde_json::json!({
        "quotes": [{
            "ticker": ticker,
            "equity": { "pricing": { "askPrice": ask_price, "bidPrice": "0.00" } }
        }],
        "errors": []
    })
    .to_string()
}
