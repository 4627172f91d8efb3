//! # Core Abstractions
//!
//! Error types, service traits and configuration shared by every layer of the terminal.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `OrderError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`OrderSubmitter`, `CatalogService`)
//! - **[`config`]**: Session configuration (`TerminalConfig`)
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ascend_terminal::core::service::CatalogService;
//! use ascend_terminal::services::catalog::DemoCatalog;
//!
//! let catalog: Arc<dyn CatalogService> = Arc::new(DemoCatalog);
//! assert_eq!(catalog.market_listings().len(), 5);
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::TerminalConfig;
pub use error::{AppError, OrderError, Result};
pub use service::{CatalogService, OrderSubmitter};
