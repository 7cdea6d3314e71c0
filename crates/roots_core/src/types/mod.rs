//! Core value and error types.
//!
//! This module provides:
//! - `complex`: The [`ComplexNumber`] value type that roots are reported in
//! - `error`: Structured error types for equation construction and solving
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`ComplexNumber`] from `complex`
//! - [`EquationError`], [`Degeneracy`] from `error`

pub mod complex;
pub mod error;

// Re-export commonly used types at module level
pub use complex::ComplexNumber;
pub use error::{Degeneracy, EquationError};
