use std::path::PathBuf;

use clap::Parser;

use crate::cli::errors::CliError;
use crate::cli::render_config::RenderFlags;
use crate::controllers::interactive::RenderMode;
use crate::core::actions::render_bands::tile_scheduler::SchedulerKind;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::render_config::RenderConfig;
use crate::core::util::pixel_to_complex_coords::INTERACTIVE_BASE_SPAN;
use crate::storage::coordinates::{DEFAULT_COORDINATES_FILE, load_coordinates};

pub const DEFAULT_SNAPSHOT_FILE: &str = "mandelbrot_interactive.png";

/// Explore the Mandelbrot set: arrows pan, wheel or W/S zoom, Escape quits.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct ViewerArgs {
    /// Window width in pixels
    #[arg(short, long, default_value = "1280")]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value = "800")]
    pub height: u32,

    #[arg(short = 'i', long, default_value = "50")]
    pub max_iterations: u32,

    /// Render threads, 0 for one per available core
    #[arg(short = 'j', long, default_value = "0")]
    pub workers: usize,

    #[arg(long, value_enum, default_value_t)]
    pub scheduler: SchedulerKind,

    #[arg(long, value_enum, default_value_t)]
    pub palette: MandelbrotColourMapKinds,

    #[arg(long, default_value_t = 1.0)]
    pub zoom: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub pan_real: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub pan_imag: f64,

    /// Render on a worker thread so input stays responsive
    #[arg(long)]
    pub background: bool,

    /// Where the last viewport is saved on exit
    #[arg(long, default_value = DEFAULT_COORDINATES_FILE)]
    pub coordinates_file: PathBuf,

    /// Start from the viewport saved in the coordinates file
    #[arg(long, conflicts_with_all = ["zoom", "pan_real", "pan_imag"])]
    pub resume: bool,

    /// PNG written from the last frame on exit
    #[arg(long, default_value = DEFAULT_SNAPSHOT_FILE)]
    pub snapshot: PathBuf,

    #[arg(long)]
    pub no_snapshot: bool,
}

/// Everything the viewer needs, validated.
#[derive(Debug, Clone)]
pub struct ViewerOptions {
    pub config: RenderConfig,
    pub viewport: Viewport,
    pub mode: RenderMode,
    pub coordinates_file: PathBuf,
    pub snapshot: Option<PathBuf>,
}

impl ViewerArgs {
    pub fn into_options(self) -> Result<ViewerOptions, CliError> {
        let config = RenderFlags {
            width: self.width,
            height: self.height,
            max_iterations: self.max_iterations,
            workers: self.workers,
            scheduler: self.scheduler,
            palette: self.palette,
        }
        .into_config(INTERACTIVE_BASE_SPAN)?;

        let viewport = if self.resume {
            load_coordinates(&self.coordinates_file)?
        } else {
            Viewport::new(self.zoom, Complex::new(self.pan_real, self.pan_imag))?
        };

        let mode = if self.background {
            RenderMode::Background
        } else {
            RenderMode::Synchronous
        };

        Ok(ViewerOptions {
            config,
            viewport,
            mode,
            coordinates_file: self.coordinates_file,
            snapshot: (!self.no_snapshot).then_some(self.snapshot),
        })
    }
}
