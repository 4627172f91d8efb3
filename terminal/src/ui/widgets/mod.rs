//! # Reusable UI Widgets
//!
//! Common widgets used across pages.

pub mod animated_value;
pub mod asset_card;
pub mod forms;
pub mod layouts;
pub mod nav_bar;
pub mod notifications;
pub mod order_form;
pub mod staking_card;
pub mod tables;
