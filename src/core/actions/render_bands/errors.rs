use crate::core::data::pixel_buffer::PixelBufferError;
use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum RenderError {
    Buffer(PixelBufferError),
    Spawn { band: usize, source: io::Error },
    WorkerPanicked { band: usize },
    Pool(rayon::ThreadPoolBuildError),
    Cancelled,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffer(err) => write!(f, "pixel buffer error: {}", err),
            Self::Spawn { band, source } => {
                write!(f, "failed to spawn worker for band {}: {}", band, source)
            }
            Self::WorkerPanicked { band } => write!(f, "worker for band {} panicked", band),
            Self::Pool(err) => write!(f, "failed to build render thread pool: {}", err),
            Self::Cancelled => write!(f, "render pass cancelled"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Buffer(err) => Some(err),
            Self::Spawn { source, .. } => Some(source),
            Self::Pool(err) => Some(err),
            Self::WorkerPanicked { .. } | Self::Cancelled => None,
        }
    }
}

impl From<PixelBufferError> for RenderError {
    fn from(err: PixelBufferError) -> Self {
        Self::Buffer(err)
    }
}

impl From<rayon::ThreadPoolBuildError> for RenderError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::Pool(err)
    }
}
