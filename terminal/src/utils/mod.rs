//! # Utility Functions
//!
//! Shared utility functions used across the terminal application.
//!
//! ## Modules
//!
//! - **[`validation`]**: Numeric text-field parsing and validation messages
//! - **[`runtime`]**: The static tokio runtime async tasks are spawned on
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate utilities (number formatting, pair parsing, rounding)
//! - [`crate::core`]: Core abstractions and error types

pub mod runtime;
pub mod validation;
