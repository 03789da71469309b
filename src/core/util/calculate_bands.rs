use crate::core::data::band::Band;
use std::num::NonZeroUsize;

/// Rows per band: `ceil(height / workers)`, never zero for a non-empty frame.
#[must_use]
pub fn calculate_band_height(height: u32, workers: NonZeroUsize) -> u32 {
    let workers = u32::try_from(workers.get()).unwrap_or(u32::MAX);

    height.div_ceil(workers).max(1)
}

/// Splits `[0, height)` into contiguous bands of `calculate_band_height` rows.
/// The last band takes whatever is left, and no band is ever empty, so there
/// can be fewer bands than workers.
#[must_use]
pub fn calculate_bands(height: u32, workers: NonZeroUsize) -> Vec<Band> {
    let band_height = calculate_band_height(height, workers);

    (0..height)
        .step_by(band_height as usize)
        .enumerate()
        .map(|(index, start_row)| {
            let end_row = start_row.saturating_add(band_height).min(height);
            Band::new(index, start_row, end_row)
        })
        .collect()
}
