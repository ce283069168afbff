//! UI module
//!
//! Toolkit-independent break window and status indicator, with the traits a
//! toolkit implements to host them.

pub mod assets;
pub mod break_window;
pub mod registry;
pub mod signal;
pub mod status_icon;
pub mod toolkit;

#[cfg(test)]
pub(crate) mod testing;

pub use break_window::BreakWindow;
pub use registry::{WindowId, WindowRegistry};
pub use status_icon::StatusIndicator;
