//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Both end in
//! [`solve_and_write`].

pub mod interactive;
pub mod solve;

use std::io::Write;
use tracing::info;

use crate::config::OutputFormat;
use crate::{output, Result};

/// Build the equation for `coeffs`, solve it and write the roots.
///
/// Nothing is written when building or solving fails; the error is returned
/// for the caller to report.
pub fn solve_and_write<W: Write>(coeffs: &[f64], format: OutputFormat, writer: &mut W) -> Result<()> {
    let equation = roots_core::create_equation(coeffs)?;
    let roots = equation.solve()?;
    info!(equation = %equation, roots = roots.len(), "Solved");

    output::write_roots(writer, format, &equation, &roots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use roots_core::EquationError;

    #[test]
    fn test_solve_and_write_error_writes_nothing() {
        let mut out = Vec::new();
        let err = solve_and_write(&[0.0, 0.0], OutputFormat::Text, &mut out).unwrap_err();
        assert!(matches!(
            err,
            CliError::Equation(EquationError::UnsupportedDegree { coefficients: 0 })
        ));
        assert!(out.is_empty());
    }
}
