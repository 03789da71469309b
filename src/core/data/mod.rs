pub mod band;
pub mod colour;
pub mod complex;
pub mod pixel_buffer;
pub mod point;
pub mod render_params;
pub mod viewport;
