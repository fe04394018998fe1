//! Behavior-driven tests for failure classification
//!
//! Each pipeline stage has its own failure class. These tests verify that a
//! failing stage short-circuits the run, never yields a price, and reports a
//! message that identifies the stage.

mod support;

use support::{fetcher_for, single_quote_body, RecordingHttpClient, EMPTY_RESPONSE, VTI_RESPONSE};
use vanquote_core::{
    pipeline, HttpError, HttpErrorKind, QuoteError, QuoteResult, ValidationError,
};

fn assert_failure_record(outcome: &Result<vanquote_core::Position, QuoteError>) -> QuoteResult {
    let result = QuoteResult::from(outcome);
    assert!(!result.success);
    assert!(result.error.is_some(), "failure must carry an error message");
    assert!(result.ticker.is_none());
    assert!(result.price.is_none(), "failure must never report a price");
    assert!(result.quantity.is_none());
    assert!(result.balance.is_none());
    result
}

// =============================================================================
// Input errors
// =============================================================================

#[tokio::test]
async fn empty_ticker_fails_without_touching_the_network() {
    // Given: A transport that would happily answer
    let client = RecordingHttpClient::ok(VTI_RESPONSE);
    let fetcher = fetcher_for(&client);

    for raw in ["", "   "] {
        // When: The user supplies no ticker
        let outcome = pipeline::quote_position(raw, 1.0, &fetcher).await;

        // Then: An input error is reported
        let error = outcome.as_ref().expect_err("must fail");
        assert_eq!(error, &QuoteError::Input(ValidationError::EmptyTicker));
        assert!(error.is_input());
        assert_failure_record(&outcome);
    }

    // And: No request was ever sent
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn non_finite_quantity_fails_without_touching_the_network() {
    let client = RecordingHttpClient::ok(VTI_RESPONSE);
    let fetcher = fetcher_for(&client);

    let outcome = pipeline::quote_position("VTI", f64::NAN, &fetcher).await;

    assert!(outcome.as_ref().expect_err("must fail").is_input());
    assert_eq!(client.call_count(), 0);
}

// =============================================================================
// Fetch-stage errors
// =============================================================================

#[tokio::test]
async fn connection_failure_reports_transport_error() {
    let client = RecordingHttpClient::failing(HttpError::new(
        HttpErrorKind::Connect,
        "connection failed: dns error",
    ));
    let fetcher = fetcher_for(&client);

    let outcome = pipeline::quote_position("VTI", 1.0, &fetcher).await;

    let error = outcome.as_ref().expect_err("must fail");
    assert_eq!(error.code(), "transport.failed");
    let record = assert_failure_record(&outcome);
    assert_eq!(
        record.error.as_deref(),
        Some("quote request failed: connection failed: dns error")
    );
}

#[tokio::test]
async fn truncated_body_reports_body_read_error() {
    let client = RecordingHttpClient::failing(HttpError::body(
        "failed to read response body: connection reset",
    ));
    let fetcher = fetcher_for(&client);

    let outcome = pipeline::quote_position("VTI", 1.0, &fetcher).await;

    assert_eq!(outcome.as_ref().expect_err("must fail").code(), "body.read");
    assert_failure_record(&outcome);
}

#[tokio::test]
async fn non_2xx_status_is_reported_before_decoding() {
    // Given: The provider rejects the request, even with a decodable body
    let client = RecordingHttpClient::responding(403, &single_quote_body("VTI", "123.45"));
    let fetcher = fetcher_for(&client);

    // When: The pipeline runs
    let outcome = pipeline::quote_position("VTI", 1.0, &fetcher).await;

    // Then: The status class wins and no price leaks through
    assert_eq!(
        outcome.as_ref().expect_err("must fail"),
        &QuoteError::Status { status: 403 }
    );
    let record = assert_failure_record(&outcome);
    assert_eq!(
        record.error.as_deref(),
        Some("quote provider returned HTTP status 403")
    );
}

// =============================================================================
// Decode-stage errors
// =============================================================================

#[tokio::test]
async fn invalid_json_reports_decode_error() {
    let client = RecordingHttpClient::ok("<!DOCTYPE html><html>Access Denied</html>");
    let fetcher = fetcher_for(&client);

    let outcome = pipeline::quote_position("VTI", 1.0, &fetcher).await;

    let error = outcome.as_ref().expect_err("must fail");
    assert!(matches!(error, QuoteError::Decode(_)));
    let record = assert_failure_record(&outcome);
    assert!(record
        .error
        .as_deref()
        .is_some_and(|message| message.starts_with("could not decode quote response JSON")));
}

#[tokio::test]
async fn empty_quote_list_reports_no_quote_data() {
    // Given: A well-formed response without any quote
    let client = RecordingHttpClient::ok(EMPTY_RESPONSE);
    let fetcher = fetcher_for(&client);

    // When: The pipeline runs
    let outcome = pipeline::quote_position("ZZZZ", 5.0, &fetcher).await;

    // Then: It is a failure rather than a zero-priced success
    assert_eq!(outcome.as_ref().expect_err("must fail").code(), "quote.missing");
    let record = assert_failure_record(&outcome);
    assert_eq!(
        record.error.as_deref(),
        Some(
            "no quote data available for ticker 'ZZZZ' \
             (provider errors: No data found for ticker ZZZZ)"
        )
    );
}

#[tokio::test]
async fn non_numeric_ask_price_reports_parse_error() {
    let client = RecordingHttpClient::ok(&single_quote_body("VTI", "N/A"));
    let fetcher = fetcher_for(&client);

    let outcome = pipeline::quote_position("VTI", 2.0, &fetcher).await;

    let error = outcome.as_ref().expect_err("must fail");
    assert!(matches!(error, QuoteError::PriceParse { value, .. } if value == "N/A"));
    let record = assert_failure_record(&outcome);
    let line = record.to_json_line().expect("result should serialize");
    assert!(!line.contains("\"price\""), "price must not be defaulted: {line}");
}

#[tokio::test]
async fn failure_output_is_deterministic() {
    let mut lines = Vec::new();
    for _ in 0..2 {
        let client = RecordingHttpClient::ok(EMPTY_RESPONSE);
        let fetcher = fetcher_for(&client);
        let outcome = pipeline::quote_position("ZZZZ", 1.0, &fetcher).await;
        lines.push(
            QuoteResult::from(&outcome)
                .to_json_line()
                .expect("result should serialize"),
        );
    }

    assert_eq!(lines[0], lines[1]);
}
