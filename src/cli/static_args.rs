use std::path::PathBuf;

use clap::Parser;

use crate::cli::render_config::RenderFlags;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_bands::tile_scheduler::SchedulerKind;
use crate::core::data::render_params::RenderParamsError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::render_config::RenderConfig;
use crate::core::util::pixel_to_complex_coords::STATIC_BASE_SPAN;
use crate::presenters::file::export_format::{ExportFormat, file_presenter_factory};

/// Render the whole Mandelbrot set once and save it to disk.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct StaticArgs {
    /// Image width in pixels
    #[arg(short, long, default_value = "800")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "600")]
    pub height: u32,

    /// Iteration cap; points that survive it are drawn black
    #[arg(short = 'i', long, default_value = "1000")]
    pub max_iterations: u32,

    /// Render threads, 0 for one per available core
    #[arg(short = 'j', long, default_value = "1")]
    pub workers: usize,

    #[arg(long, value_enum, default_value_t)]
    pub scheduler: SchedulerKind,

    #[arg(long, value_enum, default_value_t)]
    pub palette: MandelbrotColourMapKinds,

    /// Output path; each format appends its own extension
    #[arg(short, long, default_value = "mandelbrot_color")]
    pub output: PathBuf,

    /// Export format, repeat for several
    #[arg(
        short,
        long = "format",
        value_enum,
        default_values_t = [ExportFormat::Png, ExportFormat::Bmp]
    )]
    pub formats: Vec<ExportFormat>,
}

impl StaticArgs {
    pub fn render_config(&self) -> Result<RenderConfig, RenderParamsError> {
        RenderFlags {
            width: self.width,
            height: self.height,
            max_iterations: self.max_iterations,
            workers: self.workers,
            scheduler: self.scheduler,
            palette: self.palette,
        }
        .into_config(STATIC_BASE_SPAN)
    }

    /// One presenter per requested format, duplicates dropped.
    #[must_use]
    pub fn presenters(&self) -> Vec<Box<dyn FilePresenterPort>> {
        let mut formats: Vec<ExportFormat> = Vec::with_capacity(self.formats.len());
        for format in &self.formats {
            if !formats.contains(format) {
                formats.push(*format);
            }
        }

        formats.into_iter().map(file_presenter_factory).collect()
    }
}
