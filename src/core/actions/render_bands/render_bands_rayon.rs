use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};

use rayon::ThreadPool;
use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::render_bands::errors::RenderError;
use crate::core::actions::render_bands::ports::colour_map::ColourMap;
use crate::core::actions::render_bands::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_bands::render_band::render_band;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::util::calculate_bands::{calculate_band_height, calculate_bands};

/// Same band partition as the scoped-thread scheduler, executed on `pool`.
pub fn render_bands_rayon<Alg, CMap, C>(
    pool: &ThreadPool,
    buffer: &mut PixelBuffer,
    workers: NonZeroUsize,
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
) -> Result<(), RenderError>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
    C: CancelToken + ?Sized,
{
    let width = buffer.width();
    let band_height = calculate_band_height(buffer.height(), workers);
    let bands = calculate_bands(buffer.height(), workers);
    let band_bytes = band_height as usize * buffer.row_bytes();
    let data = buffer.data_mut();

    pool.install(|| {
        data.par_chunks_mut(band_bytes)
            .zip(bands.into_par_iter())
            .try_for_each(|(rows, band)| {
                panic::catch_unwind(AssertUnwindSafe(|| {
                    render_band(band, rows, width, algorithm, colour_map, cancel)
                }))
                .map_err(|_| RenderError::WorkerPanicked { band: band.index() })?
                .map_err(|Cancelled| RenderError::Cancelled)
            })
    })
}
