//! Solve command implementation
//!
//! Solves coefficients given directly on the command line. Invalid tokens are
//! an error; there is nobody to re-prompt.

use std::io::Write;
use tracing::info;

use super::solve_and_write;
use crate::config::OutputFormat;
use crate::input::parse_coefficients;
use crate::Result;

/// Run the solve command
pub fn run<S, W>(tokens: &[S], format: OutputFormat, writer: &mut W) -> Result<()>
where
    S: AsRef<str>,
    W: Write,
{
    info!("Solving {} coefficient(s) from arguments", tokens.len());
    let coeffs = parse_coefficients(tokens)?;
    solve_and_write(&coeffs, format, writer)
}
