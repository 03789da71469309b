use log::{info, warn};
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::cli::viewer_args::ViewerOptions;
use crate::controllers::interactive::InteractionController;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::MandelbrotRenderer;
use crate::input::gui::commands::errors::ViewerError;
use crate::input::gui::winit_input::WinitInputSource;
use crate::presenters::file::image_file::ImageFilePresenter;
use crate::presenters::pixels::presenter::PixelsPresenter;
use crate::storage::coordinates::save_coordinates;

pub struct RunViewerCommand {
    options: ViewerOptions,
}

impl RunViewerCommand {
    pub fn new(options: ViewerOptions) -> Self {
        Self { options }
    }

    /// Opens the window and runs the interaction loop until the user quits,
    /// then saves the final viewport and a snapshot of the last frame.
    pub fn execute(&self) -> Result<(), ViewerError> {
        let params = *self.options.config.params();
        let event_loop = EventLoop::new()?;

        // pixels needs a 'static window; it lives for the rest of the process
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Set")
                .with_inner_size(LogicalSize::new(
                    f64::from(params.width()),
                    f64::from(params.height()),
                ))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter = PixelsPresenter::new(window, params.width(), params.height())?;
        let renderer = MandelbrotRenderer::new(self.options.config)?;
        let input = WinitInputSource::new(event_loop);

        info!(
            "viewer {}x{}, {} iterations, {} workers ({}), {:?} rendering",
            params.width(),
            params.height(),
            params.max_iterations(),
            self.options.config.workers(),
            self.options.config.scheduler(),
            self.options.mode
        );

        let mut controller = InteractionController::new(
            renderer,
            self.options.viewport,
            input,
            presenter,
            self.options.mode,
        )?;
        controller.run()?;

        let viewport = controller.viewport();
        save_coordinates(&viewport, &self.options.coordinates_file)?;
        info!(
            "saved coordinates zoom={} pan={}{:+}i to {}",
            viewport.zoom(),
            viewport.pan().real,
            viewport.pan().imag,
            self.options.coordinates_file.display()
        );

        if let Some(path) = &self.options.snapshot {
            match controller.last_frame() {
                Some(frame) => {
                    ImageFilePresenter::png().present(&frame.pixel_buffer, path)?;
                    info!("saved snapshot to {}", path.display());
                }
                None => warn!("no frame was presented, skipping snapshot"),
            }
        }

        Ok(())
    }
}
