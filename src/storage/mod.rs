pub mod coordinates;
pub mod write_ppm;
