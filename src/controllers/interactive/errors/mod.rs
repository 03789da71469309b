pub mod interactive;
pub mod present;
pub mod render_failure;
