use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::render_bands::ports::colour_map::ColourMap;
use crate::core::actions::render_bands::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::band::Band;
use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;
use crate::core::data::point::Point;

/// Fills `rows` (exactly the bytes of `band`) with colours for every pixel
/// in the band. The cancel token is checked once per row.
pub fn render_band<Alg, CMap, C>(
    band: Band,
    rows: &mut [u8],
    width: u32,
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
) -> Result<(), Cancelled>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
    C: CancelToken + ?Sized,
{
    let row_bytes = width as usize * BYTES_PER_PIXEL;
    debug_assert_eq!(rows.len(), band.height() as usize * row_bytes);

    for (y, row) in band.rows().zip(rows.chunks_exact_mut(row_bytes)) {
        if cancel.is_cancelled() {
            return Err(Cancelled);
        }

        for (x, pixel) in (0..width).zip(row.chunks_exact_mut(BYTES_PER_PIXEL)) {
            let colour = colour_map.map(algorithm.compute(Point { x, y }));
            pixel.copy_from_slice(&colour.to_rgb());
        }
    }

    Ok(())
}
