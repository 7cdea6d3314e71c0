//! Complex number value type used for equation roots.
//!
//! `ComplexNumber` is a plain `Copy` value `re + im·i`. Arithmetic follows the
//! usual definitions:
//! - Addition: `(a+bi) + (c+di) = (a+c) + (b+d)i`
//! - Subtraction: `(a+bi) - (c+di) = (a-c) + (b-d)i`
//! - Multiplication: `(a+bi)(c+di) = (ac-bd) + (ad+bc)i`
//! - Division: `(a+bi)/(c+di) = ((ac+bd) + (bc-ad)i) / (c²+d²)`
//!
//! Division is the only fallible operation and is exposed as
//! [`ComplexNumber::checked_div`] rather than through `std::ops::Div`.
//!
//! # Examples
//!
//! ```
//! use roots_core::types::ComplexNumber;
//!
//! let z = ComplexNumber::of(3.0, 4.0);
//! assert_eq!(z.length(), 5.0);
//!
//! let w = ComplexNumber::of(1.0, 2.0);
//! assert_eq!(z * w, ComplexNumber::of(-5.0, 10.0));
//! assert_eq!(format!("{}", z), "3 + 4i");
//! ```

use super::EquationError;
use num_traits::Zero;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Complex number `re + im·i` with `f64` parts.
///
/// Equality is exact field-wise comparison with no tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplexNumber {
    re: f64,
    im: f64,
}

impl ComplexNumber {
    /// Zero complex number
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// One (real unit)
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    /// Imaginary unit i
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    /// Create a complex number from its real and imaginary parts.
    #[inline]
    pub const fn of(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Create a complex number with zero imaginary part.
    #[inline]
    pub const fn of_real(x: f64) -> Self {
        Self::of(x, 0.0)
    }

    /// The zero value `0 + 0i`.
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Real part.
    #[inline]
    pub const fn re(self) -> f64 {
        self.re
    }

    /// Imaginary part.
    #[inline]
    pub const fn im(self) -> f64 {
        self.im
    }

    /// Unary plus; returns the value unchanged.
    #[inline]
    pub const fn plus(self) -> Self {
        self
    }

    /// Complex conjugate `re - im·i`.
    #[inline]
    pub fn conj(self) -> Self {
        Self::of(self.re, -self.im)
    }

    /// Euclidean norm `sqrt(re² + im²)`.
    #[inline]
    pub fn length(self) -> f64 {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    /// Square root of a real number, returned as a complex value.
    ///
    /// Negative inputs give a purely imaginary result, everything else a
    /// purely real one. This is not a general complex square root.
    ///
    /// ```
    /// use roots_core::types::ComplexNumber;
    ///
    /// assert_eq!(ComplexNumber::sqrt_of_real(4.0), ComplexNumber::of(2.0, 0.0));
    /// assert_eq!(ComplexNumber::sqrt_of_real(-9.0), ComplexNumber::of(0.0, 3.0));
    /// ```
    pub fn sqrt_of_real(v: f64) -> Self {
        if v < 0.0 {
            Self::of(0.0, (-v).sqrt())
        } else {
            Self::of(v.sqrt(), 0.0)
        }
    }

    /// Divide by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`EquationError::DivisionByZero`] when both parts of `rhs` are zero.
    ///
    /// ```
    /// use roots_core::types::{ComplexNumber, EquationError};
    ///
    /// let q = ComplexNumber::of(1.0, 1.0).checked_div(ComplexNumber::of(0.0, 1.0)).unwrap();
    /// assert_eq!(q, ComplexNumber::of(1.0, -1.0));
    ///
    /// let err = ComplexNumber::of(1.0, 1.0).checked_div(ComplexNumber::zero());
    /// assert_eq!(err, Err(EquationError::DivisionByZero));
    /// ```
    pub fn checked_div(self, rhs: Self) -> Result<Self, EquationError> {
        if rhs == Self::ZERO {
            return Err(EquationError::DivisionByZero);
        }

        let denom = rhs.re * rhs.re + rhs.im * rhs.im;
        Ok(Self::of(
            (self.re * rhs.re + self.im * rhs.im) / denom,
            (self.im * rhs.re - self.re * rhs.im) / denom,
        ))
    }
}

impl From<f64> for ComplexNumber {
    fn from(x: f64) -> Self {
        Self::of_real(x)
    }
}

impl Add for ComplexNumber {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::of(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for ComplexNumber {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::of(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for ComplexNumber {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::of(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Neg for ComplexNumber {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::of(-self.re, -self.im)
    }
}

impl Zero for ComplexNumber {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i", self.re, self.im)
    }
}
