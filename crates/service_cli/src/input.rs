//! Coefficient input: parsing tokens and interactive prompting.
//!
//! The core only ever sees a validated `Vec<f64>`. Parsing, and re-prompting
//! for tokens that are not numbers, happens here.

use std::io::{BufRead, Write};
use tracing::{debug, warn};

use crate::{CliError, Result};

/// Prompt written before the coefficient line is read.
pub const PROMPT: &str = "Введите: ";

/// Line written when a token is rejected; a replacement is then read.
pub const RETRY_MESSAGE: &str = "Ошибка";

/// Parse a single coefficient token.
///
/// Accepts anything `f64::from_str` accepts except non-finite values, which
/// would defeat exact-zero normalisation.
pub fn parse_coefficient(token: &str) -> Result<f64> {
    let trimmed = token.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CliError::parse(trimmed)),
    }
}

/// Parse every token, failing on the first invalid one.
pub fn parse_coefficients<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<f64>> {
    tokens
        .iter()
        .map(|token| parse_coefficient(token.as_ref()))
        .collect()
}

/// Prompt for a line of whitespace-separated coefficients.
///
/// Each token that does not parse is reported with [`RETRY_MESSAGE`] and
/// replaced by the next input line, repeatedly, until it parses. Other tokens
/// are unaffected.
///
/// # Errors
///
/// * `CliError::UnexpectedEof` - Input ended before every token was valid
/// * `CliError::Io` - Reading or writing failed
pub fn read_coefficients<R, W>(reader: &mut R, writer: &mut W) -> Result<Vec<f64>>
where
    R: BufRead,
    W: Write,
{
    writeln!(writer, "{}", PROMPT)?;
    writer.flush()?;

    let line = read_line(reader)?.ok_or(CliError::UnexpectedEof)?;
    let mut coeffs = Vec::new();
    for token in line.split_whitespace() {
        coeffs.push(read_until_valid(token, reader, writer)?);
    }

    debug!(count = coeffs.len(), "Read coefficients");
    Ok(coeffs)
}

fn read_until_valid<R, W>(token: &str, reader: &mut R, writer: &mut W) -> Result<f64>
where
    R: BufRead,
    W: Write,
{
    let mut candidate = token.to_string();
    loop {
        match parse_coefficient(&candidate) {
            Ok(value) => return Ok(value),
            Err(err) => {
                warn!(%err, "Rejected coefficient");
                writeln!(writer, "{}", RETRY_MESSAGE)?;
                writer.flush()?;
                candidate = read_line(reader)?.ok_or(CliError::UnexpectedEof)?;
            }
        }
    }
}

/// Read one line without its terminator; `None` at end of input.
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(&['\r', '\n'][..]).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}
