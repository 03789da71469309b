use std::error::Error;
use std::fmt;

use crate::core::actions::render_bands::errors::RenderError;

/// A render pass for `generation` that failed for a reason other than
/// being superseded.
#[derive(Debug)]
pub struct RenderFailure {
    pub generation: u64,
    pub error: RenderError,
}

impl fmt::Display for RenderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "generation {}: {}", self.generation, self.error)
    }
}

impl Error for RenderFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}
