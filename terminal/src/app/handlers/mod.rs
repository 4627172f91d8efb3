//! # Event Handlers
//!
//! User action handlers organized by page.

pub mod earn;
pub mod markets;
pub mod navigation;
pub mod trading;
pub mod wallet;
