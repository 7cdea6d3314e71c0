//! Equation construction and solving.
//!
//! Raw coefficients flow through three steps:
//! 1. [`trim_leading_zeros`] drops the leading zero run
//! 2. [`select_strategy`] picks a [`RootStrategy`] from the remaining count
//! 3. [`Equation::solve`] runs the bound strategy
//!
//! # Example
//!
//! ```
//! use roots_core::equation::create_equation;
//! use roots_core::math::strategies::RootStrategy;
//! use roots_core::types::ComplexNumber;
//!
//! let eq = create_equation(&[0.0, 0.0, 1.0, -5.0]).unwrap();
//! assert_eq!(eq.coefficients(), &[1.0, -5.0]);
//! assert_eq!(eq.strategy(), RootStrategy::Linear);
//! assert_eq!(eq.solve().unwrap(), vec![ComplexNumber::of(5.0, 0.0)]);
//! ```

use crate::math::normalize::{is_normalized, trim_leading_zeros};
use crate::math::strategies::RootStrategy;
use crate::types::{ComplexNumber, EquationError};
use std::fmt;
use tracing::{debug, trace};

/// Pick the strategy for an already normalised coefficient sequence.
///
/// # Errors
///
/// Returns [`EquationError::UnsupportedDegree`] unless `normalized` has exactly
/// 2 or 3 entries. This covers constants, the all-zero input and degree ≥ 3.
pub fn select_strategy(normalized: &[f64]) -> Result<RootStrategy, EquationError> {
    match normalized.len() {
        2 => Ok(RootStrategy::Linear),
        3 => Ok(RootStrategy::Quadratic),
        n => Err(EquationError::UnsupportedDegree { coefficients: n }),
    }
}

/// Normalise `raw` and bind it to its strategy.
///
/// `raw` is ordered highest degree first.
///
/// # Errors
///
/// Returns [`EquationError::UnsupportedDegree`] when the normalised sequence
/// does not describe a linear or quadratic equation.
pub fn create_equation(raw: &[f64]) -> Result<Equation, EquationError> {
    let coeffs = trim_leading_zeros(raw);
    debug_assert!(is_normalized(&coeffs));
    debug!(
        raw_len = raw.len(),
        normalized_len = coeffs.len(),
        "Normalised coefficients"
    );

    let strategy = select_strategy(&coeffs)?;
    debug!(strategy = %strategy, "Selected root strategy");

    Ok(Equation { coeffs, strategy })
}

/// Named entry point for building equations.
///
/// Thin wrapper over [`create_equation`] and [`select_strategy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EquationFactory;

impl EquationFactory {
    /// See [`create_equation`].
    pub fn create(raw: &[f64]) -> Result<Equation, EquationError> {
        create_equation(raw)
    }

    /// See [`select_strategy`].
    pub fn select_strategy(normalized: &[f64]) -> Result<RootStrategy, EquationError> {
        select_strategy(normalized)
    }
}

/// Normalised coefficients bound to the strategy that solves them.
///
/// Immutable once built. The first coefficient is always non-zero and the
/// coefficient count always equals `strategy().coefficient_count()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    coeffs: Vec<f64>,
    strategy: RootStrategy,
}

impl Equation {
    /// Build an equation from raw coefficients. Same as [`create_equation`].
    pub fn new(raw: &[f64]) -> Result<Self, EquationError> {
        create_equation(raw)
    }

    /// Normalised coefficients, highest degree first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Number of normalised coefficients.
    pub fn size(&self) -> usize {
        self.coeffs.len()
    }

    /// Polynomial degree.
    pub fn degree(&self) -> usize {
        self.strategy.degree()
    }

    /// Strategy bound at construction.
    pub fn strategy(&self) -> RootStrategy {
        self.strategy
    }

    /// Compute the roots; one per degree, in strategy order.
    ///
    /// # Errors
    ///
    /// Propagates strategy errors. With a normalised leading coefficient these
    /// cannot be `DegenerateEquation`, but the strategy still checks.
    pub fn solve(&self) -> Result<Vec<ComplexNumber>, EquationError> {
        let roots = self.strategy.solve(&self.coeffs)?;
        trace!(equation = %self, roots = roots.len(), "Solved equation");
        Ok(roots)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.size().saturating_sub(1);
        for (i, c) in self.coeffs.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            match degree - i {
                0 => write!(f, "{}", c)?,
                1 => write!(f, "{}x", c)?,
                p => write!(f, "{}x^{}", c, p)?,
            }
        }
        write!(f, " = 0")
    }
}
