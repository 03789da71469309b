pub mod adapters;
pub mod cli;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;
pub mod storage;

pub use crate::cli::{StaticArgs, ViewerArgs, ViewerOptions};
pub use crate::controllers::interactive::{InteractionController, RenderMode};
pub use crate::controllers::static_render::controller::StaticRenderController;
pub use crate::core::actions::render_frame::MandelbrotRenderer;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::mandelbrot::render_config::RenderConfig;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_viewer::RunViewerCommand;
