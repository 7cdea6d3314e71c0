//! Interactive command implementation
//!
//! Prompts for a line of coefficients, re-prompting per rejected token, then
//! solves and prints the roots.

use std::io::{BufRead, Write};
use tracing::info;

use super::solve_and_write;
use crate::config::OutputFormat;
use crate::input::read_coefficients;
use crate::Result;

/// Run the interactive command
pub fn run<R, W>(reader: &mut R, writer: &mut W, format: OutputFormat) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    info!("Starting interactive session");
    let coeffs = read_coefficients(reader, writer)?;
    solve_and_write(&coeffs, format, writer)
}
