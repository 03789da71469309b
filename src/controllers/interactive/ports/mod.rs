pub mod frame_renderer;
pub mod input_source;
pub mod presenter;
