//! Console front end for the roots equation solver
//!
//! This crate owns everything around the pure `roots_core` computation:
//! reading and validating coefficients, configuration, logging setup and
//! rendering results.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, Result};

// Re-export the core for integration
pub use roots_core;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
