use crate::core::actions::render_bands::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

pub trait MandelbrotColourMap: ColourMap<u32> + Send + Sync {
    fn kind(&self) -> MandelbrotColourMapKinds;
}

impl ColourMap<u32> for Box<dyn MandelbrotColourMap> {
    fn map(&self, value: u32) -> Colour {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

/// Position of `iterations` along `[0, max_iterations]`, clamped to `[0, 1]`.
/// `None` when there is no range to map into.
#[must_use]
pub(crate) fn normalised_iterations(iterations: u32, max_iterations: u32) -> Option<f64> {
    if max_iterations == 0 {
        return None;
    }

    Some((f64::from(iterations) / f64::from(max_iterations)).clamp(0.0, 1.0))
}

#[must_use]
pub(crate) fn channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}
