use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::render_params::RenderParams;
use crate::core::data::viewport::Viewport;

/// Width of the real axis visible at zoom 1 in the interactive viewer.
pub const INTERACTIVE_BASE_SPAN: f64 = 2.0;
/// Width of the real axis visible in a static render.
pub const STATIC_BASE_SPAN: f64 = 4.0;

/// Maps a pixel to the complex plane. At zoom 1 the frame spans `base_span`
/// units on each axis, centred on the viewport pan.
#[must_use]
pub fn pixel_to_complex_coords(
    pixel: Point,
    params: &RenderParams,
    viewport: &Viewport,
    base_span: f64,
) -> Complex {
    let width = f64::from(params.width());
    let height = f64::from(params.height());
    let zoom = viewport.zoom();
    let pan = viewport.pan();

    Complex {
        real: (f64::from(pixel.x) - width / 2.0) / (zoom * width / base_span) + pan.real,
        imag: (f64::from(pixel.y) - height / 2.0) / (zoom * height / base_span) + pan.imag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn static_params() -> RenderParams {
        RenderParams::new(800, 600, 1000).unwrap()
    }

    #[test]
    fn test_centre_maps_to_pan() {
        let params = static_params();
        let viewport = Viewport::new(3.0, Complex::new(-0.75, 0.1)).unwrap();
        let c = pixel_to_complex_coords(Point { x: 400, y: 300 }, &params, &viewport, 2.0);

        assert_eq!(c, Complex::new(-0.75, 0.1));
    }

    #[test]
    fn test_static_corner_is_minus_two_minus_two_i() {
        let c = pixel_to_complex_coords(
            Point { x: 0, y: 0 },
            &static_params(),
            &Viewport::default(),
            STATIC_BASE_SPAN,
        );

        assert_eq!(c, Complex::new(-2.0, -2.0));
    }

    #[test]
    fn test_static_span_matches_four_over_width() {
        let params = static_params();

        for x in [0, 13, 399, 400, 799] {
            for y in [0, 7, 300, 599] {
                let c = pixel_to_complex_coords(
                    Point { x, y },
                    &params,
                    &Viewport::default(),
                    STATIC_BASE_SPAN,
                );

                assert_eq!(c.real, (f64::from(x) - 400.0) * 4.0 / 800.0);
                assert_eq!(c.imag, (f64::from(y) - 300.0) * 4.0 / 600.0);
            }
        }
    }

    #[test]
    fn test_interactive_span_matches_half_zoom_width() {
        let params = RenderParams::new(1280, 800, 50).unwrap();
        let viewport = Viewport::new(1.1, Complex::new(0.3, -0.2)).unwrap();

        for (x, y) in [(0, 0), (1, 799), (640, 400), (1279, 12)] {
            let c = pixel_to_complex_coords(Point { x, y }, &params, &viewport, INTERACTIVE_BASE_SPAN);

            assert_eq!(c.real, (f64::from(x) - 640.0) / (0.5 * 1.1 * 1280.0) + 0.3);
            assert_eq!(c.imag, (f64::from(y) - 400.0) / (0.5 * 1.1 * 800.0) - 0.2);
        }
    }

    #[test]
    fn test_zoom_narrows_visible_region() {
        let params = static_params();
        let near = pixel_to_complex_coords(
            Point { x: 0, y: 0 },
            &params,
            &Viewport::new(2.0, Complex::ZERO).unwrap(),
            STATIC_BASE_SPAN,
        );

        assert_eq!(near, Complex::new(-1.0, -1.0));
    }
}
