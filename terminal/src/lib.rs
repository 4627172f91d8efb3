//! # AscendEX Exchange Terminal - Library Root
//!
//! A **native desktop GUI** for a centralized crypto exchange: dashboard, markets, trading,
//! wallet and earn pages over demo data. This library crate contains all modules used by
//! the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              terminal (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI, native window     │
//! │  egui_plot     - Candles, depth and allocation charts  │
//! │  egui_extras   - Market listing table                  │
//! │  egui-notify   - Toasts                                │
//! │  Tokio         - Async order submission                │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  shared         │  DTOs, pair parsing, number formatting
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: [`App`] orchestrator, routes, state, handlers and the order task
//! - **core**: configuration, errors and the service traits
//! - **debug**: tracing setup
//! - **pages**: per-page state and its rules (filters, dialogs, validation)
//! - **services**: the demo catalog
//! - **trading**: order draft calculator, confirmation controller, chart data
//! - **ui**: screens, widgets, charts and theme
//! - **utils**: Tokio runtime and input validation
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p ascend-terminal
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod pages;
pub mod services;
pub mod trading;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState, Route};
pub use core::{AppError, Result};
