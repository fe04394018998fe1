use std::sync::Arc;

use vanquote_core::{
    pipeline, FetcherConfig, Position, QuoteError, QuoteFetcher, RequestParameters,
    ReqwestHttpClient,
};

use crate::cli::Cli;
use crate::error::CliError;

pub fn resolve(cli: &Cli) -> Result<RequestParameters, CliError> {
    RequestParameters::new(&cli.ticker, cli.qty)
        .map_err(|error| CliError::Quote(QuoteError::from(error)))
}

pub fn fetcher_config(cli: &Cli) -> FetcherConfig {
    FetcherConfig::from_env().with_timeout_ms(cli.timeout_ms)
}

/// Resolve input, then run the pipeline against the live provider.
pub async fn run(cli: &Cli) -> Result<Position, CliError> {
    let params = resolve(cli)?;

    let config = fetcher_config(cli);
    let client = ReqwestHttpClient::from_config(&config).map_err(QuoteError::from)?;
    let fetcher = QuoteFetcher::new(Arc::new(client), config);

    Ok(pipeline::run(&params, &fetcher).await?)
}
