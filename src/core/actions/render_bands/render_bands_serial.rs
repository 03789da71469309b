use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::render_bands::errors::RenderError;
use crate::core::actions::render_bands::ports::colour_map::ColourMap;
use crate::core::actions::render_bands::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_bands::render_band::render_band;
use crate::core::data::band::Band;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Renders the whole frame as a single band on the calling thread.
pub fn render_bands_serial<Alg, CMap, C>(
    buffer: &mut PixelBuffer,
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
) -> Result<(), RenderError>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
    C: CancelToken + ?Sized,
{
    let width = buffer.width();
    let band = Band::new(0, 0, buffer.height());

    render_band(band, buffer.data_mut(), width, algorithm, colour_map, cancel)
        .map_err(|Cancelled| RenderError::Cancelled)
}
