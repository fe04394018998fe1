use std::io::Write;

use vanquote_core::QuoteResult;

use crate::error::CliError;

/// Write the result as one compact JSON line.
pub fn render(result: &QuoteResult) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    write_line(&mut stdout.lock(), result)
}

pub fn write_line(writer: &mut impl Write, result: &QuoteResult) -> Result<(), CliError> {
    let payload = result.to_json_line()?;
    writeln!(writer, "{payload}")?;
    writer.flush()?;
    Ok(())
}
