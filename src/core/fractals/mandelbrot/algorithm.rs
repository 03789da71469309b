use crate::core::actions::render_bands::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::render_params::RenderParams;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Number of `z = z² + c` steps taken from `z = 0` before `|z|² > 4`, or
/// `max_iterations` if the orbit never escapes.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
        z = z * z + c;
    }

    max_iterations
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    params: RenderParams,
    viewport: Viewport,
    base_span: f64,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(params: RenderParams, viewport: Viewport, base_span: f64) -> Self {
        Self {
            params,
            viewport,
            base_span,
        }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    fn compute(&self, pixel: Point) -> u32 {
        let c = pixel_to_complex_coords(pixel, &self.params, &self.viewport, self.base_span);

        escape_time(c, self.params.max_iterations())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::util::pixel_to_complex_coords::STATIC_BASE_SPAN;

    #[test]
    fn test_origin_never_escapes() {
        for max_iterations in [1, 2, 50, 1000, 5000] {
            assert_eq!(escape_time(Complex::ZERO, max_iterations), max_iterations);
        }
    }

    #[test]
    fn test_far_point_escapes_after_one_step() {
        assert_eq!(escape_time(Complex::new(-2.0, -2.0), 1000), 1);
        assert_eq!(escape_time(Complex::new(3.0, 0.0), 1000), 1);
    }

    #[test]
    fn test_boundary_point_minus_two_stays_bounded() {
        // z goes 0, -2, 2, 2, ... and |z|² = 4 never exceeds the radius
        assert_eq!(escape_time(Complex::new(-2.0, 0.0), 200), 200);
    }

    #[test]
    fn test_escape_time_is_non_decreasing_in_max_iterations() {
        let points = [
            Complex::new(0.25, 0.5),
            Complex::new(-0.75, 0.1),
            Complex::new(0.3, 0.0),
            Complex::new(-1.5, 0.01),
            Complex::new(0.0, 1.0),
        ];

        for c in points {
            let mut previous = 0;
            for max_iterations in 1..300 {
                let iterations = escape_time(c, max_iterations);
                assert!(iterations >= previous, "{:?} at {}", c, max_iterations);
                assert!(iterations <= max_iterations);
                previous = iterations;
            }
        }
    }

    #[test]
    fn test_static_centre_pixel_hits_cap() {
        let params = RenderParams::new(800, 600, 1000).unwrap();
        let algorithm = MandelbrotAlgorithm::new(params, Viewport::default(), STATIC_BASE_SPAN);

        assert_eq!(algorithm.compute(Point { x: 400, y: 300 }), 1000);
    }

    #[test]
    fn test_static_corner_pixel_escapes_quickly() {
        let params = RenderParams::new(800, 600, 1000).unwrap();
        let algorithm = MandelbrotAlgorithm::new(params, Viewport::default(), STATIC_BASE_SPAN);

        assert_eq!(algorithm.compute(Point { x: 0, y: 0 }), 1);
    }
}
