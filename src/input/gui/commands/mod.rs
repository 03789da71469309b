pub mod errors;
pub mod run_viewer;
