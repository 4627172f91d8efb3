//! Global Tokio runtime for order submission tasks
//!
//! egui drives the UI from its own event loop, so async work runs on this static
//! runtime and reports back through the app's event channel, which is drained every
//! frame.
//!
//! Usage:
//! ```rust,no_run
//! use ascend_terminal::utils::runtime::TOKIO_RT;
//!
//! TOKIO_RT.spawn(async move {
//!     // await the submission, then send an AppEvent back to the UI thread
//! });
//! ```

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> =
    Lazy::new(|| Runtime::new().expect("Failed to create Tokio runtime for order submission"));
