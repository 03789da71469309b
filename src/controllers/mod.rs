pub mod interactive;
pub mod ports;
pub mod static_render;
