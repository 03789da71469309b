//! Windowed viewer: winit input, pixels presentation.

pub mod commands;
pub mod held_keys;
pub mod winit_input;
