use crate::core::actions::render_bands::tile_scheduler::SchedulerKind;
use crate::core::data::render_params::{RenderParams, RenderParamsError};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::render_config::RenderConfig;
use crate::core::util::available_workers::resolve_workers;

/// Render flags shared by both binaries, before validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RenderFlags {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub workers: usize,
    pub scheduler: SchedulerKind,
    pub palette: MandelbrotColourMapKinds,
}

impl RenderFlags {
    pub fn into_config(self, base_span: f64) -> Result<RenderConfig, RenderParamsError> {
        let params = RenderParams::new(self.width, self.height, self.max_iterations)?;

        Ok(RenderConfig::new(params, base_span)?
            .with_workers(resolve_workers(self.workers))
            .with_scheduler(self.scheduler)
            .with_colour_map(self.palette))
    }
}
