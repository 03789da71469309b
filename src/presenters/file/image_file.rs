use std::path::Path;

use image::{ExtendedColorType, ImageError, ImageFormat};

use crate::controllers::ports::file_presenter::{ExportError, FilePresenterPort};
use crate::core::data::pixel_buffer::PixelBuffer;

impl From<ImageError> for ExportError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::IoError(err) => Self::Io(err),
            other => Self::Encode(Box::new(other)),
        }
    }
}

/// Lossless export through the `image` crate encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageFilePresenter {
    format: ImageFormat,
}

impl ImageFilePresenter {
    #[must_use]
    pub fn png() -> Self {
        Self {
            format: ImageFormat::Png,
        }
    }

    #[must_use]
    pub fn bmp() -> Self {
        Self {
            format: ImageFormat::Bmp,
        }
    }
}

impl FilePresenterPort for ImageFilePresenter {
    fn extension(&self) -> &'static str {
        self.format.extensions_str().first().copied().unwrap_or("img")
    }

    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), ExportError> {
        image::save_buffer_with_format(
            filepath,
            buffer.buffer(),
            buffer.width(),
            buffer.height(),
            ExtendedColorType::Rgb8,
            self.format,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient() -> PixelBuffer {
        let data = (0..4 * 3 * 3).map(|value| (value * 7) as u8).collect();
        PixelBuffer::from_data(4, 3, data).unwrap()
    }

    #[test]
    fn test_extensions() {
        assert_eq!(ImageFilePresenter::png().extension(), "png");
        assert_eq!(ImageFilePresenter::bmp().extension(), "bmp");
    }

    #[test]
    fn test_png_round_trip_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let buffer = gradient();

        ImageFilePresenter::png().present(&buffer, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.as_raw(), buffer.buffer());
    }

    #[test]
    fn test_bmp_round_trip_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.bmp");
        let buffer = gradient();

        ImageFilePresenter::bmp().present(&buffer, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.as_raw(), buffer.buffer());
    }

    #[test]
    fn test_unwritable_path_surfaces_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("frame.png");

        let result = ImageFilePresenter::png().present(&gradient(), &path);

        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
