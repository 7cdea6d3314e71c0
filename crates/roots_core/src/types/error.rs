//! Error types for structured error handling.
//!
//! This module provides:
//! - `EquationError`: Errors from equation construction, solving and complex arithmetic
//! - `Degeneracy`: The two ways a linear equation with a zero leading coefficient degenerates

use std::fmt;
use thiserror::Error;

/// Sub-kind of a degenerate linear equation `0·x + b = 0`.
///
/// # Examples
/// ```
/// use roots_core::types::Degeneracy;
///
/// assert_eq!(Degeneracy::InfiniteRoots.to_string(), "infinite roots");
/// assert_eq!(Degeneracy::NoRoots.to_string(), "no roots");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Degeneracy {
    /// `0 = 0`: every x satisfies the equation.
    InfiniteRoots,

    /// `0 = b` with `b != 0`: no x satisfies the equation.
    NoRoots,
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degeneracy::InfiniteRoots => write!(f, "infinite roots"),
            Degeneracy::NoRoots => write!(f, "no roots"),
        }
    }
}

/// Equation and complex arithmetic errors.
///
/// Every core operation fails fast with one of these variants; nothing is
/// retried or recovered inside the core.
///
/// # Variants
/// - `UnsupportedDegree`: Normalised coefficient count is neither 2 nor 3
/// - `InsufficientCoefficients`: A strategy received fewer coefficients than it needs
/// - `DegenerateEquation`: Linear equation whose leading coefficient is zero
/// - `DivisionByZero`: Complex division by the zero value
///
/// # Examples
/// ```
/// use roots_core::types::{Degeneracy, EquationError};
///
/// let err = EquationError::DegenerateEquation(Degeneracy::NoRoots);
/// assert_eq!(format!("{}", err), "Degenerate equation: no roots");
///
/// let err = EquationError::UnsupportedDegree { coefficients: 4 };
/// assert!(format!("{}", err).contains("4 coefficients"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EquationError {
    /// Normalised coefficient count is not 2 (linear) or 3 (quadratic).
    #[error("Unsupported degree: {coefficients} coefficients after normalisation, expected 2 or 3")]
    UnsupportedDegree {
        /// Number of coefficients left after trimming leading zeros
        coefficients: usize,
    },

    /// A strategy was handed fewer coefficients than its degree requires.
    #[error("Insufficient coefficients: got {got}, need {need}")]
    InsufficientCoefficients {
        /// Number of coefficients provided
        got: usize,
        /// Number of coefficients the strategy requires
        need: usize,
    },

    /// Linear equation with a zero leading coefficient.
    #[error("Degenerate equation: {0}")]
    DegenerateEquation(Degeneracy),

    /// Complex division by zero.
    #[error("Division by zero")]
    DivisionByZero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degeneracy_display() {
        assert_eq!(format!("{}", Degeneracy::InfiniteRoots), "infinite roots");
        assert_eq!(format!("{}", Degeneracy::NoRoots), "no roots");
    }

    #[test]
    fn test_unsupported_degree_display() {
        let err = EquationError::UnsupportedDegree { coefficients: 0 };
        assert_eq!(
            format!("{}", err),
            "Unsupported degree: 0 coefficients after normalisation, expected 2 or 3"
        );
    }

    #[test]
    fn test_insufficient_coefficients_display() {
        let err = EquationError::InsufficientCoefficients { got: 1, need: 2 };
        assert_eq!(format!("{}", err), "Insufficient coefficients: got 1, need 2");
    }

    #[test]
    fn test_degenerate_display() {
        let err = EquationError::DegenerateEquation(Degeneracy::InfiniteRoots);
        assert_eq!(format!("{}", err), "Degenerate equation: infinite roots");
    }

    #[test]
    fn test_division_by_zero_display() {
        assert_eq!(format!("{}", EquationError::DivisionByZero), "Division by zero");
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&EquationError::DivisionByZero);
    }

    #[test]
    fn test_error_clone_eq() {
        let err = EquationError::DegenerateEquation(Degeneracy::NoRoots);
        assert_eq!(err.clone(), err);
    }
}
