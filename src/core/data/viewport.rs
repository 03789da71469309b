use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

pub const ZOOM_STEP: f64 = 1.1;
pub const PAN_STEP: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewportError {
    InvalidZoom { zoom: f64 },
    NonFinitePan { pan: Complex },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoom { zoom } => {
                write!(f, "zoom {} must be finite and greater than zero", zoom)
            }
            Self::NonFinitePan { pan } => {
                write!(f, "pan ({}, {}) must be finite", pan.real, pan.imag)
            }
        }
    }
}

impl Error for ViewportError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Zoom factor and complex-plane offset of the visible region.
///
/// Zoom only ever changes multiplicatively, and a step that would leave the
/// normal `f64` range is refused, so it stays strictly positive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan: Complex,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Complex::ZERO,
        }
    }
}

impl Viewport {
    pub fn new(zoom: f64, pan: Complex) -> Result<Self, ViewportError> {
        if !zoom.is_normal() || zoom < 0.0 {
            return Err(ViewportError::InvalidZoom { zoom });
        }

        if !pan.is_finite() {
            return Err(ViewportError::NonFinitePan { pan });
        }

        Ok(Self { zoom, pan })
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn pan(&self) -> Complex {
        self.pan
    }

    /// Returns `false` when the viewport was left unchanged.
    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom(self.zoom * ZOOM_STEP)
    }

    /// Returns `false` when the viewport was left unchanged.
    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom(self.zoom / ZOOM_STEP)
    }

    /// Moves one pan step in `direction`, scaled by the current zoom.
    pub fn pan_by_step(&mut self, direction: PanDirection) -> bool {
        let step = PAN_STEP / self.zoom;
        let next = match direction {
            PanDirection::Left => Complex::new(self.pan.real - step, self.pan.imag),
            PanDirection::Right => Complex::new(self.pan.real + step, self.pan.imag),
            PanDirection::Up => Complex::new(self.pan.real, self.pan.imag - step),
            PanDirection::Down => Complex::new(self.pan.real, self.pan.imag + step),
        };

        if !next.is_finite() || next == self.pan {
            return false;
        }

        self.pan = next;
        true
    }

    fn set_zoom(&mut self, zoom: f64) -> bool {
        if !zoom.is_normal() {
            return false;
        }

        self.zoom = zoom;
        true
    }
}
