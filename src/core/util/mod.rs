pub mod available_workers;
pub mod calculate_bands;
pub mod pixel_to_complex_coords;
