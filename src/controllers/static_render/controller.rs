use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::info;

use crate::controllers::ports::file_presenter::{ExportError, FilePresenterPort};
use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::render_bands::errors::RenderError;
use crate::core::actions::render_frame::MandelbrotRenderer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::render_config::RenderConfig;

#[derive(Debug)]
pub enum StaticRenderError {
    NothingRendered,
    Render(RenderError),
    Export { path: PathBuf, source: ExportError },
}

impl fmt::Display for StaticRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingRendered => write!(f, "no frame has been rendered yet"),
            Self::Render(err) => write!(f, "render failed: {}", err),
            Self::Export { path, source } => {
                write!(f, "failed to export {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for StaticRenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NothingRendered => None,
            Self::Render(err) => Some(err),
            Self::Export { source, .. } => Some(source),
        }
    }
}

impl From<RenderError> for StaticRenderError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

/// One full frame at zoom 1 centred on the origin, exported once per
/// presenter. The frame is kept after a failed export so `write` can be
/// called again.
pub struct StaticRenderController {
    renderer: MandelbrotRenderer,
    presenters: Vec<Box<dyn FilePresenterPort>>,
    buffer: Option<PixelBuffer>,
}

impl StaticRenderController {
    pub fn new(
        config: RenderConfig,
        presenters: Vec<Box<dyn FilePresenterPort>>,
    ) -> Result<Self, StaticRenderError> {
        Ok(Self {
            renderer: MandelbrotRenderer::new(config)?,
            presenters,
            buffer: None,
        })
    }

    pub fn generate(&mut self) -> Result<Duration, StaticRenderError> {
        let config = self.renderer.config();
        let params = config.params();

        info!(
            "rendering {}x{} Mandelbrot, max iterations {}, {} worker(s), {}",
            params.width(),
            params.height(),
            params.max_iterations(),
            self.renderer.scheduler().workers(),
            config.colour_map()
        );

        let start = Instant::now();
        let buffer = self.renderer.render_frame(Viewport::default(), &NeverCancel)?;
        let duration = start.elapsed();

        info!("render finished in {:?}", duration);
        self.buffer = Some(buffer);

        Ok(duration)
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Writes `<output>.<ext>` for every presenter, stopping at the first
    /// failure. The extension is appended, so a dotted stem is kept whole.
    pub fn write(&self, output: &Path) -> Result<Vec<PathBuf>, StaticRenderError> {
        let buffer = self.buffer.as_ref().ok_or(StaticRenderError::NothingRendered)?;
        let mut written = Vec::with_capacity(self.presenters.len());

        for presenter in &self.presenters {
            let path = with_appended_extension(output, presenter.extension());

            presenter
                .present(buffer, &path)
                .map_err(|source| StaticRenderError::Export {
                    path: path.clone(),
                    source,
                })?;

            info!("saved {}", path.display());
            written.push(path);
        }

        Ok(written)
    }
}

fn with_appended_extension(output: &Path, extension: &str) -> PathBuf {
    let mut path = output.as_os_str().to_owned();
    path.push(".");
    path.push(extension);
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use crate::core::data::render_params::RenderParams;
    use crate::core::util::pixel_to_complex_coords::STATIC_BASE_SPAN;
    use std::cell::{Cell, RefCell};
    use std::io;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingPresenter {
        calls: Rc<RefCell<Vec<PathBuf>>>,
    }

    impl FilePresenterPort for RecordingPresenter {
        fn extension(&self) -> &'static str {
            "rec"
        }

        fn present(&self, _buffer: &PixelBuffer, filepath: &Path) -> Result<(), ExportError> {
            self.calls.borrow_mut().push(filepath.to_path_buf());
            Ok(())
        }
    }

    struct FlakyPresenter {
        failures_left: Rc<Cell<u32>>,
    }

    impl FilePresenterPort for FlakyPresenter {
        fn extension(&self) -> &'static str {
            "flaky"
        }

        fn present(&self, _buffer: &PixelBuffer, _filepath: &Path) -> Result<(), ExportError> {
            if self.failures_left.get() > 0 {
                self.failures_left.set(self.failures_left.get() - 1);
                return Err(ExportError::Io(io::Error::other("disk full")));
            }
            Ok(())
        }
    }

    fn config(width: u32, height: u32, max_iterations: u32) -> RenderConfig {
        RenderConfig::new(
            RenderParams::new(width, height, max_iterations).unwrap(),
            STATIC_BASE_SPAN,
        )
        .unwrap()
    }

    #[test]
    fn test_write_before_generate_fails() {
        let controller = StaticRenderController::new(config(4, 4, 10), Vec::new()).unwrap();

        assert!(matches!(
            controller.write(Path::new("out")),
            Err(StaticRenderError::NothingRendered)
        ));
    }

    #[test]
    fn test_default_frame_matches_known_pixels() {
        let mut controller = StaticRenderController::new(config(800, 600, 1000), Vec::new()).unwrap();

        controller.generate().unwrap();
        let buffer = controller.buffer().unwrap();

        assert_eq!(buffer.pixel(Point { x: 400, y: 300 }), Some(Colour::BLACK));
        assert_ne!(buffer.pixel(Point { x: 0, y: 0 }), Some(Colour::BLACK));
    }

    #[test]
    fn test_write_uses_presenter_extension() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let presenter = RecordingPresenter {
            calls: Rc::clone(&calls),
        };
        let mut controller =
            StaticRenderController::new(config(4, 4, 10), vec![Box::new(presenter)]).unwrap();

        controller.generate().unwrap();
        let written = controller.write(Path::new("frames/mandelbrot_color")).unwrap();

        assert_eq!(written, vec![PathBuf::from("frames/mandelbrot_color.rec")]);
        assert_eq!(*calls.borrow(), written);
    }

    #[test]
    fn test_write_keeps_dotted_output_name() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let presenter = RecordingPresenter {
            calls: Rc::clone(&calls),
        };
        let mut controller =
            StaticRenderController::new(config(4, 4, 10), vec![Box::new(presenter)]).unwrap();

        controller.generate().unwrap();
        let written = controller.write(Path::new("shots/frame.v2")).unwrap();

        assert_eq!(written, vec![PathBuf::from("shots/frame.v2.rec")]);
    }

    #[test]
    fn test_failed_export_keeps_buffer_for_retry() {
        let failures_left = Rc::new(Cell::new(1));
        let presenter = FlakyPresenter {
            failures_left: Rc::clone(&failures_left),
        };
        let mut controller =
            StaticRenderController::new(config(4, 4, 10), vec![Box::new(presenter)]).unwrap();
        controller.generate().unwrap();

        let first = controller.write(Path::new("out"));

        assert!(matches!(first, Err(StaticRenderError::Export { .. })));
        assert!(controller.buffer().is_some());
        assert_eq!(controller.write(Path::new("out")).unwrap().len(), 1);
    }
}
