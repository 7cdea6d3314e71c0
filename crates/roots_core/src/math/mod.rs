//! Coefficient normalisation and closed-form root strategies.
//!
//! - `normalize`: Leading-zero trimming so the coefficient count matches the degree
//! - `strategies`: The [`RootStrategy`](strategies::RootStrategy) variants for degree 1 and 2

pub mod normalize;
pub mod strategies;
