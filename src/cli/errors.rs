use std::error::Error;
use std::fmt;

use crate::core::data::render_params::RenderParamsError;
use crate::core::data::viewport::ViewportError;
use crate::storage::coordinates::CoordinatesError;

#[derive(Debug)]
pub enum CliError {
    Params(RenderParamsError),
    Viewport(ViewportError),
    Coordinates(CoordinatesError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Params(err) => write!(f, "invalid render settings: {}", err),
            Self::Viewport(err) => write!(f, "invalid start viewport: {}", err),
            Self::Coordinates(err) => write!(f, "could not load saved coordinates: {}", err),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Params(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::Coordinates(err) => Some(err),
        }
    }
}

impl From<RenderParamsError> for CliError {
    fn from(err: RenderParamsError) -> Self {
        Self::Params(err)
    }
}

impl From<ViewportError> for CliError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<CoordinatesError> for CliError {
    fn from(err: CoordinatesError) -> Self {
        Self::Coordinates(err)
    }
}
