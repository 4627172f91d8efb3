//! # Common Error Types
//!
//! Consolidated error handling for the exchange terminal.
//!
//! ## Error Categories
//!
//! - **[`OrderError`]**: Why an order submission did not go through (cancelled, refused,
//!   abandoned, rejected). Always surfaced as an "Order Failed" notification with the
//!   draft kept for editing.
//! - **[`AppError`]**: Application-wide failures (validation, configuration, state).
//!
//! Field-level order form problems are *not* errors in this sense: they live on the form
//! as inline messages (see [`crate::trading::order_form::FieldErrors`]).
//!
//! ## Usage Pattern
//!
//! ```rust
//! use ascend_terminal::core::error::{AppError, OrderError};
//!
//! let err: AppError = OrderError::Cancelled.into();
//! assert_eq!(err.to_string(), "Order error: Order cancelled by user.");
//! ```

use thiserror::Error;

/// Outcome of an order submission that did not place the order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The user dismissed or cancelled the confirmation dialog
    #[error("Order cancelled by user.")]
    Cancelled,

    /// A second submission arrived while one was still awaiting confirmation
    #[error("Another order is already awaiting confirmation")]
    AlreadyPending,

    /// The confirmation owner went away before the order was resolved
    #[error("Order confirmation was abandoned")]
    Abandoned,

    /// The order submitter refused the order
    #[error("Order rejected: {0}")]
    Rejected(String),
}

/// Application-wide error type.
///
/// # Example
///
/// ```rust
/// use ascend_terminal::core::error::AppError;
///
/// let err = AppError::Validation("Amount must be positive".to_string());
/// assert_eq!(err.to_string(), "Validation error: Amount must be positive");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Input validation error.
    ///
    /// Used for dialog inputs (withdrawal, stake) that fail their checks:
    /// - Missing required fields
    /// - Non-numeric or non-positive amounts
    /// - Business rules (amount above balance, below minimum stake)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Order submission failure
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// Configuration file or environment override problem
    #[error("Config error: {0}")]
    Config(String),

    /// Application state error.
    ///
    /// Used when an action targets state that is not there, e.g. submitting a withdrawal
    /// with no dialog open.
    #[error("State error: {0}")]
    State(String),
}

impl AppError {
    /// Message suitable for an inline dialog error, without the category prefix
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::Config(msg) | AppError::State(msg) => msg.clone(),
            AppError::Order(err) => err.to_string(),
        }
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_message_matches_dialog_text() {
        assert_eq!(OrderError::Cancelled.to_string(), "Order cancelled by user.");
    }

    #[test]
    fn test_order_error_converts_into_app_error() {
        let err: AppError = OrderError::Rejected("insufficient margin".to_string()).into();
        assert!(matches!(err, AppError::Order(OrderError::Rejected(_))));
        assert_eq!(err.user_message(), "Order rejected: insufficient margin");
    }

    #[test]
    fn test_user_message_strips_category() {
        let err = AppError::Validation("Please fill all fields".to_string());
        assert_eq!(err.user_message(), "Please fill all fields");
        assert_eq!(err.to_string(), "Validation error: Please fill all fields");
    }
}
