use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::MandelbrotColourMapKinds,
    map::MandelbrotColourMap,
    maps::{fire_gradient::MandelbrotFireGradient, polynomial_gradient::MandelbrotPolynomialGradient},
};

#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: MandelbrotColourMapKinds,
    max_iterations: u32,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKinds::Polynomial => {
            Box::new(MandelbrotPolynomialGradient::new(max_iterations))
        }
        MandelbrotColourMapKinds::Fire => Box::new(MandelbrotFireGradient::new(max_iterations)),
    }
}
