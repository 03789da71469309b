use crate::core::actions::render_bands::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::{
    MandelbrotColourMap, channel, normalised_iterations,
};

/// Black, red, orange, yellow, white in four equal quarters. Points that
/// reach the cap are black.
#[derive(Debug)]
pub struct MandelbrotFireGradient {
    max_iterations: u32,
}

impl MandelbrotFireGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

fn fire_colour(t: f64) -> Colour {
    let (r, g, b) = if t < 0.25 {
        let local_t = t / 0.25;
        (local_t * 255.0, 0.0, 0.0)
    } else if t < 0.5 {
        let local_t = (t - 0.25) / 0.25;
        (255.0, local_t * 165.0, 0.0)
    } else if t < 0.75 {
        let local_t = (t - 0.5) / 0.25;
        (255.0, 165.0 + local_t * 90.0, 0.0)
    } else {
        let local_t = (t - 0.75) / 0.25;
        (255.0, 255.0, local_t * 255.0)
    };

    Colour {
        r: channel(r),
        g: channel(g),
        b: channel(b),
    }
}

impl ColourMap<u32> for MandelbrotFireGradient {
    fn map(&self, iterations: u32) -> Colour {
        if iterations >= self.max_iterations {
            return Colour::BLACK;
        }

        normalised_iterations(iterations, self.max_iterations).map_or(Colour::BLACK, fire_colour)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotFireGradient {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::Fire
    }
}
