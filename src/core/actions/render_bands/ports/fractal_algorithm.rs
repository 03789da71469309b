use crate::core::data::point::Point;

/// Per-pixel fractal evaluation. Implementations must be pure so that bands
/// can be evaluated in any order on any thread.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;
}
