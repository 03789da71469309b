use std::error::Error;
use std::fmt;

use winit::error::{EventLoopError, OsError};

use crate::controllers::interactive::errors::interactive::InteractiveError;
use crate::controllers::ports::file_presenter::ExportError;
use crate::core::actions::render_bands::errors::RenderError;
use crate::storage::coordinates::CoordinatesError;

#[derive(Debug)]
pub enum ViewerError {
    EventLoop(EventLoopError),
    Window(OsError),
    Surface(pixels::Error),
    Renderer(RenderError),
    Interactive(InteractiveError),
    Coordinates(CoordinatesError),
    Snapshot(ExportError),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "failed to create event loop: {}", err),
            Self::Window(err) => write!(f, "failed to create window: {}", err),
            Self::Surface(err) => write!(f, "failed to create pixel surface: {}", err),
            Self::Renderer(err) => write!(f, "failed to set up renderer: {}", err),
            Self::Interactive(err) => write!(f, "viewer stopped: {}", err),
            Self::Coordinates(err) => write!(f, "failed to save coordinates: {}", err),
            Self::Snapshot(err) => write!(f, "failed to save snapshot: {}", err),
        }
    }
}

impl Error for ViewerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Surface(err) => Some(err),
            Self::Renderer(err) => Some(err),
            Self::Interactive(err) => Some(err),
            Self::Coordinates(err) => Some(err),
            Self::Snapshot(err) => Some(err),
        }
    }
}

impl From<EventLoopError> for ViewerError {
    fn from(err: EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<OsError> for ViewerError {
    fn from(err: OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for ViewerError {
    fn from(err: pixels::Error) -> Self {
        Self::Surface(err)
    }
}

impl From<RenderError> for ViewerError {
    fn from(err: RenderError) -> Self {
        Self::Renderer(err)
    }
}

impl From<InteractiveError> for ViewerError {
    fn from(err: InteractiveError) -> Self {
        Self::Interactive(err)
    }
}

impl From<CoordinatesError> for ViewerError {
    fn from(err: CoordinatesError) -> Self {
        Self::Coordinates(err)
    }
}

impl From<ExportError> for ViewerError {
    fn from(err: ExportError) -> Self {
        Self::Snapshot(err)
    }
}
