//! Coefficient normalisation.
//!
//! A polynomial's true degree is set by its first non-zero coefficient, so
//! leading zeros are dropped before a strategy is chosen.

/// Drop the leading run of zero coefficients.
///
/// Coefficients are ordered highest degree first. The scan stops at the first
/// entry that is not exactly `0.0`; an all-zero (or empty) input yields an
/// empty vector.
///
/// # Example
///
/// ```
/// use roots_core::math::normalize::trim_leading_zeros;
///
/// assert_eq!(trim_leading_zeros(&[0.0, 0.0, 1.0, -5.0]), vec![1.0, -5.0]);
/// assert!(trim_leading_zeros(&[0.0, 0.0, 0.0]).is_empty());
/// ```
pub fn trim_leading_zeros(coeffs: &[f64]) -> Vec<f64> {
    let first = coeffs
        .iter()
        .position(|&c| c != 0.0)
        .unwrap_or(coeffs.len());
    coeffs[first..].to_vec()
}

/// Returns `true` if `coeffs` is already normalised.
///
/// An empty slice counts as normalised.
pub fn is_normalized(coeffs: &[f64]) -> bool {
    coeffs.first().map_or(true, |&c| c != 0.0)
}
