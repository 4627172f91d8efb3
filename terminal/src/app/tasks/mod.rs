//! # Async Tasks
//!
//! Background work spawned on the shared tokio runtime.

pub mod orders;
