//! # roots_core: Closed-form Roots of Linear and Quadratic Equations
//!
//! roots_core takes real polynomial coefficients (highest degree first) and
//! returns the roots over the complex numbers. It provides:
//! - A complex number value type (`types::complex`)
//! - Structured error types: `EquationError`, `Degeneracy` (`types::error`)
//! - Leading-zero normalisation (`math::normalize`)
//! - Linear and quadratic strategies (`math::strategies`)
//! - Strategy dispatch and the `Equation` wrapper (`equation`)
//!
//! ## No I/O
//!
//! Everything here is a pure function over immutable values. Reading and
//! parsing user input belongs to the `service_cli` crate.
//!
//! ## Usage Examples
//!
//! ```rust
//! use roots_core::equation::create_equation;
//! use roots_core::types::{ComplexNumber, EquationError};
//!
//! // x² - 3x + 2 = 0
//! let eq = create_equation(&[1.0, -3.0, 2.0]).unwrap();
//! let roots = eq.solve().unwrap();
//! assert_eq!(roots, vec![ComplexNumber::of(2.0, 0.0), ComplexNumber::of(1.0, 0.0)]);
//!
//! // All-zero input has no degree
//! let err = create_equation(&[0.0, 0.0, 0.0]).unwrap_err();
//! assert_eq!(err, EquationError::UnsupportedDegree { coefficients: 0 });
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `ComplexNumber` and `Degeneracy`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod equation;
pub mod math;
pub mod types;

pub use equation::{create_equation, select_strategy, Equation, EquationFactory};
pub use math::normalize::trim_leading_zeros;
pub use math::strategies::RootStrategy;
pub use types::{ComplexNumber, Degeneracy, EquationError};
