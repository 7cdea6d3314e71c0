//! Rendering roots and errors to the output stream.

use roots_core::{ComplexNumber, Equation};
use serde::Serialize;
use std::io::Write;

use crate::config::OutputFormat;
use crate::{CliError, Result};

/// Header line written before the roots in text mode.
pub const ROOTS_HEADER: &str = "Корни: ";

/// Prefix of the single error line in text mode.
pub const ERROR_PREFIX: &str = "Ошибка: ";

/// JSON document for a solved equation.
#[derive(Debug, Serialize)]
pub struct SolveReport<'a> {
    /// Normalised coefficients
    pub coefficients: &'a [f64],
    /// Polynomial degree
    pub degree: usize,
    /// Strategy name
    pub strategy: &'static str,
    /// Roots in strategy order
    pub roots: &'a [ComplexNumber],
}

#[derive(Debug, Serialize)]
struct ErrorReport {
    error: String,
}

/// Write the roots of `equation` in the requested format.
pub fn write_roots<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    equation: &Equation,
    roots: &[ComplexNumber],
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(writer, "{}", ROOTS_HEADER)?;
            for root in roots {
                writeln!(writer, "{}", root)?;
            }
        }
        OutputFormat::Json => {
            let report = SolveReport {
                coefficients: equation.coefficients(),
                degree: equation.degree(),
                strategy: equation.strategy().name(),
                roots,
            };
            serde_json::to_writer(&mut *writer, &report)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Write `err` as the single user-visible failure line.
pub fn write_error<W: Write>(writer: &mut W, format: OutputFormat, err: &CliError) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(writer, "{}{}", ERROR_PREFIX, err)?,
        OutputFormat::Json => {
            let report = ErrorReport {
                error: err.to_string(),
            };
            serde_json::to_writer(&mut *writer, &report)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}
