pub mod cancellation;
pub mod render_bands;
pub mod render_frame;
