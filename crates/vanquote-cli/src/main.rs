mod cli;
mod error;
mod output;
mod quote;

use clap::error::ErrorKind;
use clap::Parser;
use log::{debug, LevelFilter};
use std::process::ExitCode;
use vanquote_core::QuoteResult;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    init_logger();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error)
            if matches!(
                error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            // Help and version go to stdout as text.
            let _ = error.print();
            return ExitCode::SUCCESS;
        }
        Err(error) => return report(CliError::Usage(usage_message(&error))),
    };

    match run(&cli).await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let outcome = quote::run(cli).await;

    let result = match &outcome {
        Ok(position) => QuoteResult::success(position),
        Err(error) => QuoteResult::failure(error.to_string()),
    };
    output::render(&result)?;

    match outcome {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(error) => {
            debug!("quote failed ({}): {error}", error_code(&error));
            Ok(ExitCode::from(error.exit_code()))
        }
    }
}

/// Print the failure record for errors raised before the pipeline starts.
fn report(error: CliError) -> ExitCode {
    if let Err(render_error) = output::render(&QuoteResult::failure(error.to_string())) {
        eprintln!("error: {render_error}");
        return ExitCode::from(render_error.exit_code());
    }
    ExitCode::from(error.exit_code())
}

/// First line of clap's report, without the `error: ` prefix or usage block.
fn usage_message(error: &clap::Error) -> String {
    let rendered = error.render().to_string();
    let first = rendered.lines().next().unwrap_or_default().trim();
    first.strip_prefix("error: ").unwrap_or(first).to_owned()
}

fn error_code(error: &CliError) -> &'static str {
    match error {
        CliError::Quote(quote) => quote.code(),
        CliError::Usage(_) => "usage",
        CliError::Serialization(_) => "serialization",
        CliError::Io(_) => "io",
    }
}

// Diagnostics go to stderr only and stay silent unless RUST_LOG is set.
fn init_logger() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Off)
        .target(env_logger::Target::Stderr)
        .parse_default_env()
        .init();
}
