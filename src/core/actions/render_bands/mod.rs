pub mod errors;
pub mod ports;
pub mod render_band;
pub mod render_bands_rayon;
pub mod render_bands_scoped_threads;
pub mod render_bands_serial;
pub mod tile_scheduler;
