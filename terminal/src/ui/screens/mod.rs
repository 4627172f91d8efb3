//! # Screen Modules
//!
//! One module per route. Every screen follows the same pattern:
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike, theme: &Theme)
//! ```
//!
//! Screens read from the cloned [`AppState`](crate::app::AppState) snapshot and report user
//! intent through [`AppLike`](crate::app::AppLike). They never take the state lock.

pub mod dashboard;
pub mod earn;
pub mod markets;
pub mod not_found;
pub mod trading;
pub mod wallet;
