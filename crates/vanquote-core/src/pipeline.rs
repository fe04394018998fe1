use log::debug;

use crate::provider::{decode_ask_price, QuoteFetcher};
use crate::{Position, QuoteError, RequestParameters};

/// Fetch, decode and value one position. Stops at the first failing stage.
pub async fn run(
    params: &RequestParameters,
    fetcher: &QuoteFetcher,
) -> Result<Position, QuoteError> {
    let response = fetcher.fetch(params.ticker()).await?;
    let price = decode_ask_price(params.ticker(), &response.body)?;
    debug!("ask price for {} is {price}", params.ticker());

    Ok(Position::new(params.ticker().clone(), price, params.quantity()))
}

/// Resolve raw input first so that invalid input never reaches the network.
pub async fn quote_position(
    ticker: &str,
    quantity: f64,
    fetcher: &QuoteFetcher,
) -> Result<Position, QuoteError> {
    let params = RequestParameters::new(ticker, quantity)?;
    run(&params, fetcher).await
}
