use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum PresentError {
    SizeMismatch { expected: usize, actual: usize },
    Surface(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => write!(
                f,
                "frame has {} bytes but the surface expects {}",
                actual, expected
            ),
            Self::Surface(err) => write!(f, "surface error: {}", err),
        }
    }
}

impl Error for PresentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SizeMismatch { .. } => None,
            Self::Surface(err) => Some(err.as_ref()),
        }
    }
}
