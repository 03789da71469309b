//! Input adapters that feed the interactive controller.

#[cfg(feature = "gui")]
pub mod gui;
