use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderParamsError {
    ZeroWidth,
    ZeroHeight,
    ZeroMaxIterations,
    InvalidBaseSpan { base_span: f64 },
}

impl fmt::Display for RenderParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "width must be greater than zero"),
            Self::ZeroHeight => write!(f, "height must be greater than zero"),
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::InvalidBaseSpan { base_span } => {
                write!(f, "base span {} must be finite and greater than zero", base_span)
            }
        }
    }
}

impl Error for RenderParamsError {}

/// Frame size and iteration cap, fixed for the lifetime of a renderer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderParams {
    width: u32,
    height: u32,
    max_iterations: u32,
}

impl RenderParams {
    pub fn new(width: u32, height: u32, max_iterations: u32) -> Result<Self, RenderParamsError> {
        if width == 0 {
            return Err(RenderParamsError::ZeroWidth);
        }

        if height == 0 {
            return Err(RenderParamsError::ZeroHeight);
        }

        if max_iterations == 0 {
            return Err(RenderParamsError::ZeroMaxIterations);
        }

        Ok(Self {
            width,
            height,
            max_iterations,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
