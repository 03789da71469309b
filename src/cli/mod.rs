//! Command line arguments for the two binaries.

pub mod errors;
mod render_config;
pub mod static_args;
pub mod viewer_args;

pub use errors::CliError;
pub use static_args::StaticArgs;
pub use viewer_args::{ViewerArgs, ViewerOptions};
