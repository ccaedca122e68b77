//! Interactive input.

use std::io::{BufRead, Write};

use stockvol_core::StockvolError;

use crate::config::{AnalysisConfig, parse_date};

fn io_err(e: &std::io::Error) -> StockvolError {
    StockvolError::Other(format!("terminal I/O failed: {e}"))
}

/// Print `label`, then read one trimmed line.
///
/// # Errors
/// Returns `InvalidArg` on end of input and `Other` on I/O failure.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<String, StockvolError> {
    write!(output, "{label}").map_err(|e| io_err(&e))?;
    output.flush().map_err(|e| io_err(&e))?;
    let mut line = String::new();
    let n = input.read_line(&mut line).map_err(|e| io_err(&e))?;
    if n == 0 {
        return Err(StockvolError::invalid_arg(format!(
            "no input for prompt '{}'",
            label.trim_end_matches([':', ' '])
        )));
    }
    Ok(line.trim().to_string())
}

/// Ask for ticker, start date, and end date.
///
/// The ticker is upper-cased. The returned config uses the default window
/// and has already been validated.
///
/// # Errors
/// Returns `InvalidArg` for malformed dates, an empty ticker, an inverted
/// range, or missing input.
pub fn read_config<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<AnalysisConfig, StockvolError> {
    let symbol = ask(input, output, "Enter stock ticker: ")?.to_ascii_uppercase();
    let start = parse_date(&ask(input, output, "Enter start date (YYYY-MM-DD): ")?)?;
    let end = parse_date(&ask(input, output, "Enter end date (YYYY-MM-DD): ")?)?;
    let config = AnalysisConfig::new(symbol, start, end);
    config.validate()?;
    Ok(config)
}
