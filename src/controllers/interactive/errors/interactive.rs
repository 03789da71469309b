use std::error::Error;
use std::fmt;
use std::io;

use crate::controllers::interactive::errors::present::PresentError;
use crate::core::actions::render_bands::errors::RenderError;

#[derive(Debug)]
pub enum InteractiveError {
    Setup(RenderError),
    SpawnWorker(io::Error),
    Present(PresentError),
}

impl fmt::Display for InteractiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Setup(err) => write!(f, "failed to set up renderer: {}", err),
            Self::SpawnWorker(err) => write!(f, "failed to start render worker: {}", err),
            Self::Present(err) => write!(f, "failed to present frame: {}", err),
        }
    }
}

impl Error for InteractiveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Setup(err) => Some(err),
            Self::SpawnWorker(err) => Some(err),
            Self::Present(err) => Some(err),
        }
    }
}

impl From<RenderError> for InteractiveError {
    fn from(err: RenderError) -> Self {
        Self::Setup(err)
    }
}

impl From<PresentError> for InteractiveError {
    fn from(err: PresentError) -> Self {
        Self::Present(err)
    }
}
