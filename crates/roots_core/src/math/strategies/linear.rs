//! Linear equation solver.

use crate::types::{ComplexNumber, Degeneracy, EquationError};

/// Solve `a·x + b = 0` given `coeffs = [a, b]`.
///
/// # Returns
///
/// * `Ok(vec![x])` - The single root `-b/a` with zero imaginary part
/// * `Err(EquationError::InsufficientCoefficients)` - Fewer than 2 coefficients
/// * `Err(EquationError::DegenerateEquation(InfiniteRoots))` - `a == 0` and `b == 0`
/// * `Err(EquationError::DegenerateEquation(NoRoots))` - `a == 0` and `b != 0`
///
/// # Example
///
/// ```
/// use roots_core::math::strategies::solve_linear;
/// use roots_core::types::ComplexNumber;
///
/// assert_eq!(solve_linear(&[2.0, 4.0]).unwrap(), vec![ComplexNumber::of(-2.0, 0.0)]);
/// ```
pub fn solve_linear(coeffs: &[f64]) -> Result<Vec<ComplexNumber>, EquationError> {
    let (a, b) = match coeffs {
        [a, b, ..] => (*a, *b),
        _ => {
            return Err(EquationError::InsufficientCoefficients {
                got: coeffs.len(),
                need: 2,
            })
        }
    };

    if a == 0.0 {
        let kind = if b == 0.0 {
            Degeneracy::InfiniteRoots
        } else {
            Degeneracy::NoRoots
        };
        return Err(EquationError::DegenerateEquation(kind));
    }

    Ok(vec![ComplexNumber::of(-b / a, 0.0)])
}
