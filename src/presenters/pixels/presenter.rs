use log::trace;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::adapters::pixel_format::copy_rgb_to_rgba;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::present::PresentError;
use crate::controllers::interactive::ports::presenter::FramePresenterPort;
use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;

const RGBA_BYTES_PER_PIXEL: usize = 4;

/// Shows finished frames in a window through a `pixels` surface.
///
/// The pixel buffer has the render dimensions; `pixels` scales it to the
/// window's physical size.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            width,
            height,
        })
    }
}

impl FramePresenterPort for PixelsPresenter {
    fn present(&mut self, frame: &FrameData) -> Result<(), PresentError> {
        let buffer = &frame.pixel_buffer;
        if buffer.width() != self.width || buffer.height() != self.height {
            let pixel_count = self.width as usize * self.height as usize;
            return Err(PresentError::SizeMismatch {
                expected: pixel_count * BYTES_PER_PIXEL,
                actual: buffer.buffer_size(),
            });
        }

        let expected = buffer.buffer_size() / BYTES_PER_PIXEL * RGBA_BYTES_PER_PIXEL;
        let surface = self.pixels.frame_mut();
        if surface.len() != expected {
            return Err(PresentError::SizeMismatch {
                expected,
                actual: surface.len(),
            });
        }

        copy_rgb_to_rgba(buffer.buffer(), surface)
            .map_err(|err| PresentError::Surface(Box::new(err)))?;
        self.pixels
            .render()
            .map_err(|err| PresentError::Surface(err.to_string().into()))?;

        trace!("presented generation {}", frame.generation);
        Ok(())
    }
}
