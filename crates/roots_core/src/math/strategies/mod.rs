//! Closed-form root strategies.
//!
//! Each supported degree has one solving procedure. [`RootStrategy`] is the
//! closed set of those procedures; the variant is picked from the normalised
//! coefficient count by [`crate::equation::select_strategy`].
//!
//! ## Available Strategies
//!
//! - [`RootStrategy::Linear`]: `a·x + b = 0`, one root
//! - [`RootStrategy::Quadratic`]: `a·x² + b·x + c = 0`, two roots
//!
//! ## Examples
//!
//! ```
//! use roots_core::math::strategies::RootStrategy;
//! use roots_core::types::ComplexNumber;
//!
//! // x² - 3x + 2 = 0
//! let roots = RootStrategy::Quadratic.solve(&[1.0, -3.0, 2.0]).unwrap();
//! assert_eq!(roots, vec![ComplexNumber::of(2.0, 0.0), ComplexNumber::of(1.0, 0.0)]);
//! ```

mod linear;
mod quadratic;

pub use linear::solve_linear;
pub use quadratic::solve_quadratic;

use crate::types::{ComplexNumber, EquationError};
use std::fmt;

/// Solving procedure bound to a supported degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootStrategy {
    /// Degree 1: `a·x + b = 0`
    Linear,
    /// Degree 2: `a·x² + b·x + c = 0`
    Quadratic,
}

impl RootStrategy {
    /// Polynomial degree this strategy solves.
    pub fn degree(&self) -> usize {
        match self {
            RootStrategy::Linear => 1,
            RootStrategy::Quadratic => 2,
        }
    }

    /// Number of coefficients this strategy expects (`degree + 1`).
    pub fn coefficient_count(&self) -> usize {
        self.degree() + 1
    }

    /// Lowercase strategy name.
    pub fn name(&self) -> &'static str {
        match self {
            RootStrategy::Linear => "linear",
            RootStrategy::Quadratic => "quadratic",
        }
    }

    /// Solve for the roots of the equation described by `coeffs`.
    ///
    /// `coeffs` is ordered highest degree first.
    ///
    /// # Errors
    ///
    /// See [`solve_linear`] and [`solve_quadratic`].
    pub fn solve(&self, coeffs: &[f64]) -> Result<Vec<ComplexNumber>, EquationError> {
        match self {
            RootStrategy::Linear => solve_linear(coeffs),
            RootStrategy::Quadratic => solve_quadratic(coeffs),
        }
    }
}

impl fmt::Display for RootStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
