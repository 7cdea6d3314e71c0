//! Quadratic equation solver.

use super::linear::solve_linear;
use crate::types::{ComplexNumber, EquationError};

/// Solve `a·x² + b·x + c = 0` given `coeffs = [a, b, c]`.
///
/// A zero leading coefficient collapses the equation to `b·x + c = 0`, which
/// is handed to [`solve_linear`]. Otherwise the discriminant `d = b² − 4ac`
/// decides the shape of the result:
/// - `d < 0`: a complex-conjugate pair `-b/(2a) ± i·sqrt(-d)/(2a)`
/// - `d ≥ 0`: two real roots `(-b ± sqrt(d))/(2a)`, the `+` root first
///
/// A zero discriminant reports the repeated root twice.
///
/// # Errors
///
/// * `EquationError::InsufficientCoefficients` - Fewer than 3 coefficients
/// * Any error from [`solve_linear`] when `a == 0`
///
/// # Example
///
/// ```
/// use roots_core::math::strategies::solve_quadratic;
/// use roots_core::types::ComplexNumber;
///
/// // x² + 1 = 0
/// let roots = solve_quadratic(&[1.0, 0.0, 1.0]).unwrap();
/// assert_eq!(roots, vec![ComplexNumber::of(0.0, 1.0), ComplexNumber::of(0.0, -1.0)]);
/// ```
pub fn solve_quadratic(coeffs: &[f64]) -> Result<Vec<ComplexNumber>, EquationError> {
    let (a, b, c) = match coeffs {
        [a, b, c, ..] => (*a, *b, *c),
        _ => {
            return Err(EquationError::InsufficientCoefficients {
                got: coeffs.len(),
                need: 3,
            })
        }
    };

    if a == 0.0 {
        return solve_linear(&[b, c]);
    }

    let d = b * b - 4.0 * a * c;
    let two_a = 2.0 * a;

    if d < 0.0 {
        // purely imaginary for a negative argument
        let sqrt_d = ComplexNumber::sqrt_of_real(d);
        Ok(vec![
            ComplexNumber::of(-b / two_a, sqrt_d.im() / two_a),
            ComplexNumber::of(-b / two_a, -sqrt_d.im() / two_a),
        ])
    } else {
        let sqrt_d = ComplexNumber::sqrt_of_real(d);
        Ok(vec![
            ComplexNumber::of((-b + sqrt_d.re()) / two_a, 0.0),
            ComplexNumber::of((-b - sqrt_d.re()) / two_a, 0.0),
        ])
    }
}
