//! # Logging Infrastructure
//!
//! File-based structured logging for the exchange terminal.
//!
//! ## Features
//!
//! - **File-based logging**: Structured logs to `logs/ascend-terminal.log` (daily rotation)
//! - **Realtime log**: Optional pretty-printed log truncated every session
//! - **Panic logging**: Panics are recorded with location and message
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tracing::info;
//!
//! // Initialize at app startup
//! ascend_terminal::debug::init();
//!
//! info!(route = "/markets", "Navigated");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `ascend_terminal=debug,info`)
//! - `ASCEND_LOG_DIR`: Log directory (default: `logs`)
//! - `ASCEND_DEBUG_REALTIME`: Enable the realtime log (1=on, 0=off)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;

/// Initialize the logging system.
///
/// Call this at application startup, before any other operations.
pub fn init() {
    init_logger();
}
