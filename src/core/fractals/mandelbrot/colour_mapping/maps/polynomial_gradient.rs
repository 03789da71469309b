use crate::core::actions::render_bands::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::{
    MandelbrotColourMap, channel, normalised_iterations,
};

/// Smooth dark-blue to pale gradient from three Bernstein-style polynomials
/// in `t = iterations / max_iterations`. Both ends of the range are black.
#[derive(Debug)]
pub struct MandelbrotPolynomialGradient {
    max_iterations: u32,
}

impl MandelbrotPolynomialGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[must_use]
pub fn polynomial_colour(t: f64) -> Colour {
    let s = 1.0 - t;

    Colour {
        r: channel(9.0 * s * t * t * t * 255.0),
        g: channel(15.0 * s * s * t * t * 255.0),
        b: channel(8.5 * s * s * s * t * 255.0),
    }
}

impl ColourMap<u32> for MandelbrotPolynomialGradient {
    fn map(&self, iterations: u32) -> Colour {
        normalised_iterations(iterations, self.max_iterations)
            .map_or(Colour::BLACK, polynomial_colour)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotPolynomialGradient {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::Polynomial
    }
}
