use std::num::NonZeroUsize;

use crate::core::actions::render_bands::errors::RenderError;
use crate::core::actions::render_bands::tile_scheduler::{SchedulerKind, TileScheduler};
use crate::core::data::render_params::{RenderParams, RenderParamsError};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;

/// Everything a render pass needs besides the viewport. Built once at
/// startup and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    params: RenderParams,
    workers: NonZeroUsize,
    scheduler: SchedulerKind,
    base_span: f64,
    colour_map: MandelbrotColourMapKinds,
}

impl RenderConfig {
    pub fn new(params: RenderParams, base_span: f64) -> Result<Self, RenderParamsError> {
        if !base_span.is_normal() || base_span < 0.0 {
            return Err(RenderParamsError::InvalidBaseSpan { base_span });
        }

        Ok(Self {
            params,
            workers: NonZeroUsize::MIN,
            scheduler: SchedulerKind::default(),
            base_span,
            colour_map: MandelbrotColourMapKinds::default(),
        })
    }

    #[must_use]
    pub fn with_workers(mut self, workers: NonZeroUsize) -> Self {
        self.workers = workers;
        self
    }

    #[must_use]
    pub fn with_scheduler(mut self, scheduler: SchedulerKind) -> Self {
        self.scheduler = scheduler;
        self
    }

    #[must_use]
    pub fn with_colour_map(mut self, colour_map: MandelbrotColourMapKinds) -> Self {
        self.colour_map = colour_map;
        self
    }

    #[must_use]
    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    #[must_use]
    pub fn workers(&self) -> NonZeroUsize {
        self.workers
    }

    #[must_use]
    pub fn scheduler(&self) -> SchedulerKind {
        self.scheduler
    }

    #[must_use]
    pub fn base_span(&self) -> f64 {
        self.base_span
    }

    #[must_use]
    pub fn colour_map(&self) -> MandelbrotColourMapKinds {
        self.colour_map
    }

    #[must_use]
    pub fn build_algorithm(&self, viewport: Viewport) -> MandelbrotAlgorithm {
        MandelbrotAlgorithm::new(self.params, viewport, self.base_span)
    }

    #[must_use]
    pub fn build_colour_map(&self) -> Box<dyn MandelbrotColourMap> {
        mandelbrot_colour_map_factory(self.colour_map, self.params.max_iterations())
    }

    pub fn build_scheduler(&self) -> Result<TileScheduler, RenderError> {
        TileScheduler::new(self.scheduler, self.workers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::util::pixel_to_complex_coords::{INTERACTIVE_BASE_SPAN, STATIC_BASE_SPAN};

    fn params() -> RenderParams {
        RenderParams::new(80, 60, 100).unwrap()
    }

    #[test]
    fn test_defaults_are_single_worker_polynomial() {
        let config = RenderConfig::new(params(), STATIC_BASE_SPAN).unwrap();

        assert_eq!(config.workers().get(), 1);
        assert_eq!(config.scheduler(), SchedulerKind::ScopedThreads);
        assert_eq!(config.colour_map(), MandelbrotColourMapKinds::Polynomial);
        assert_eq!(config.base_span(), 4.0);
    }

    #[test]
    fn test_rejects_bad_base_span() {
        for base_span in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                RenderConfig::new(params(), base_span),
                Err(RenderParamsError::InvalidBaseSpan { .. })
            ));
        }
    }

    #[test]
    fn test_builders_carry_settings_through() {
        let config = RenderConfig::new(params(), INTERACTIVE_BASE_SPAN)
            .unwrap()
            .with_workers(NonZeroUsize::new(3).unwrap())
            .with_scheduler(SchedulerKind::Rayon)
            .with_colour_map(MandelbrotColourMapKinds::Fire);
        let scheduler = config.build_scheduler().unwrap();

        assert_eq!(scheduler.workers().get(), 3);
        assert_eq!(scheduler.kind(), SchedulerKind::Rayon);
        assert_eq!(config.build_colour_map().kind(), MandelbrotColourMapKinds::Fire);
    }
}
