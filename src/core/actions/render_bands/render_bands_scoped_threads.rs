use std::num::NonZeroUsize;
use std::thread::{self, ScopedJoinHandle};

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::render_bands::errors::RenderError;
use crate::core::actions::render_bands::ports::colour_map::ColourMap;
use crate::core::actions::render_bands::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_bands::render_band::render_band;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::util::calculate_bands::{calculate_band_height, calculate_bands};

/// One scoped thread per band, each owning a disjoint `&mut` slice of the
/// buffer. Every spawned thread is joined before this returns, and the
/// first failure in band order is reported.
pub fn render_bands_scoped_threads<Alg, CMap, C>(
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

    thread::scope(|scope| -> Result<(), RenderError> {
        let mut handles = Vec::with_capacity(bands.len());
        let mut spawn_error = None;

        for (band, rows) in bands.into_iter().zip(buffer.data_mut().chunks_mut(band_bytes)) {
            let spawned = thread::Builder::new()
                .name(format!("band-{}", band.index()))
                .spawn_scoped(scope, move || {
                    render_band(band, rows, width, algorithm, colour_map, cancel)
                });

            match spawned {
                Ok(handle) => handles.push((band.index(), handle)),
                Err(source) => {
                    spawn_error = Some(RenderError::Spawn {
                        band: band.index(),
                        source,
                    });
                    break;
                }
            }
        }

        let joined = join_bands(handles);

        match spawn_error {
            Some(err) => Err(err),
            None => joined,
        }
    })
}

fn join_bands(
    handles: Vec<(usize, ScopedJoinHandle<'_, Result<(), Cancelled>>)>,
) -> Result<(), RenderError> {
    let mut outcome = Ok(());

    for (band, handle) in handles {
        let result = match handle.join() {
            Ok(Ok(())) => Ok(()),
            Ok(Err(Cancelled)) => Err(RenderError::Cancelled),
            Err(_) => Err(RenderError::WorkerPanicked { band }),
        };

        if outcome.is_ok() {
            outcome = result;
        }
    }

    outcome
}
