use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::render_bands::errors::RenderError;
use crate::core::actions::render_bands::tile_scheduler::TileScheduler;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::render_config::RenderConfig;

/// A render configuration paired with the scheduler it asked for.
#[derive(Debug)]
pub struct MandelbrotRenderer {
    config: RenderConfig,
    scheduler: TileScheduler,
}

impl MandelbrotRenderer {
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        let scheduler = config.build_scheduler()?;

        Ok(Self { config, scheduler })
    }

    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[must_use]
    pub fn scheduler(&self) -> &TileScheduler {
        &self.scheduler
    }

    /// One complete pass for `viewport`.
    pub fn render_frame<C>(&self, viewport: Viewport, cancel: &C) -> Result<PixelBuffer, RenderError>
    where
        C: CancelToken + ?Sized,
    {
        let algorithm = self.config.build_algorithm(viewport);
        let colour_map = self.config.build_colour_map();

        self.scheduler
            .render(self.config.params(), &algorithm, &colour_map, cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::actions::render_bands::tile_scheduler::SchedulerKind;
    use crate::core::data::complex::Complex;
    use crate::core::data::render_params::RenderParams;
    use crate::core::util::pixel_to_complex_coords::INTERACTIVE_BASE_SPAN;
    use std::num::NonZeroUsize;

    #[test]
    fn test_panned_frame_differs_from_centred_frame() {
        let config = RenderConfig::new(RenderParams::new(32, 20, 50).unwrap(), INTERACTIVE_BASE_SPAN)
            .unwrap()
            .with_workers(NonZeroUsize::new(2).unwrap())
            .with_scheduler(SchedulerKind::Rayon);
        let renderer = MandelbrotRenderer::new(config).unwrap();

        let centred = renderer.render_frame(Viewport::default(), &NeverCancel).unwrap();
        let panned = renderer
            .render_frame(Viewport::new(1.0, Complex::new(-0.5, 0.0)).unwrap(), &NeverCancel)
            .unwrap();

        assert_eq!(centred.width(), 32);
        assert_eq!(centred.height(), 20);
        assert_ne!(centred, panned);
    }
}
