//! Interactive pan/zoom exploration.
//!
//! [`InteractionController`] owns the viewport and runs the poll, render,
//! present loop against three ports:
//! - [`InputSource`] delivers discrete events and held keys once per step
//! - [`FrameRendererPort`] turns a viewport into a complete frame
//! - [`FramePresenterPort`] shows a finished frame
//!
//! Rendering happens inline by default. [`RenderMode::Background`] moves it
//! onto a [`RenderWorker`] thread so input keeps flowing during long passes.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;
pub mod render_worker;
pub mod state;

pub use controller::{InteractionController, RenderMode, StepOutcome};
pub use ports::frame_renderer::FrameRendererPort;
pub use ports::input_source::InputSource;
pub use ports::presenter::FramePresenterPort;
pub use render_worker::RenderWorker;
