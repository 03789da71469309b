use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::render_bands::errors::RenderError;
use crate::core::actions::render_frame::MandelbrotRenderer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;

pub trait FrameRendererPort {
    fn render(&self, viewport: Viewport, cancel: &dyn CancelToken)
    -> Result<PixelBuffer, RenderError>;
}

impl FrameRendererPort for MandelbrotRenderer {
    fn render(
        &self,
        viewport: Viewport,
        cancel: &dyn CancelToken,
    ) -> Result<PixelBuffer, RenderError> {
        self.render_frame(viewport, cancel)
    }
}
