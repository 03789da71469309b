pub mod input;
pub mod render_event;
